//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Use Cases**: list/append for names, list/create for records
//! - **DTOs**: data shapes handed to the HTTP adapter

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;
