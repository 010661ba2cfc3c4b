//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod name_dto;
mod record_dto;

pub use name_dto::NameListingDto;
pub use record_dto::NameRecordDto;
