//! Infrastructure Layer
//!
//! Adapters implementing the domain ports and the HTTP surface.

pub mod http;
pub mod persistence;
