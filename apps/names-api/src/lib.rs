// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Names API - Rust Core Library
//!
//! REST service that keeps a list of submitted names.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: value objects, entities and repository ports
//!   - `names`: the `Name` value and the process-lifetime name store port
//!   - `records`: persisted name records and their field validator
//!
//! - **Application**: use cases and DTOs
//!   - `use_cases`: `ListNames`, `SaveName`, `ListRecords`, `CreateRecord`
//!   - `dto`: response shapes handed to the HTTP layer
//!
//! - **Infrastructure**: adapters
//!   - `http`: axum router, payload decoding, response envelopes
//!   - `persistence`: in-memory stores and the turso record repository
//!
//! Cross-cutting: `config` (YAML + env interpolation), `error` (HTTP error
//! mapping), `telemetry` (tracing subscriber).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core types with no I/O.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - HTTP and storage adapters.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Request error types and HTTP mapping.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Config, ConfigError, load_config, load_config_or_default};
pub use domain::names::{Name, NameRepository};
pub use domain::records::{NameRecord, RecordRepository, RecordValidator};
pub use error::{ApiError, ErrorCode};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{
    InMemoryNameStore, InMemoryRecordRepository, TursoRecordRepository,
};
