//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod create_record;
mod list_names;
mod list_records;
mod save_name;

pub use create_record::{CreateRecordError, CreateRecordUseCase};
pub use list_names::ListNamesUseCase;
pub use list_records::ListRecordsUseCase;
pub use save_name::{SaveNameError, SaveNameUseCase};
