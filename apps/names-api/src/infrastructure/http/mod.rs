//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to application use cases.

mod controller;
mod middleware;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use middleware::trace_request;
pub use request::Payload;
pub use response::*;
