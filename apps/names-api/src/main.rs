//! Names API Binary
//!
//! Serves the name list at `/` and persisted name records at `/api/`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin names-api
//! ```
//!
//! # Environment Variables
//!
//! - `NAMES_API_CONFIG`: config file path (default: `config.yaml` if present,
//!   built-in defaults otherwise)
//! - `RUST_LOG`: log filter, overrides `observability.logging.level`
//!
//! Any `${VAR}` referenced from the config file is read after `.env` loading.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use names_api::config::{CONFIG_PATH_ENV, Config, StorageBackend, load_config_or_default};
use names_api::domain::records::RecordRepository;
use names_api::infrastructure::http::{AppState, create_router};
use names_api::infrastructure::persistence::{
    InMemoryNameStore, InMemoryRecordRepository, TursoRecordRepository,
};
use names_api::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

const IN_MEMORY_DB: &str = ":memory:";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config =
        load_config_or_default(config_path.as_deref()).context("failed to load configuration")?;

    init_tracing(&config.observability.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = config.persistence.backend.as_str(),
        "Starting Names API"
    );

    match config.persistence.backend {
        StorageBackend::Turso => {
            let records = open_turso(&config.persistence.db_path).await?;
            serve(&config, records).await?;
        }
        StorageBackend::Memory => {
            tracing::warn!("Memory backend selected, records will not survive a restart");
            serve(&config, InMemoryRecordRepository::new()).await?;
        }
    }

    tracing::info!("Names API stopped");
    Ok(())
}

async fn open_turso(db_path: &str) -> anyhow::Result<TursoRecordRepository> {
    if db_path != IN_MEMORY_DB
        && let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create database directory {}", parent.display()))?;
    }

    let repo = TursoRecordRepository::open(db_path)
        .await
        .with_context(|| format!("failed to open database at {db_path}"))?;
    tracing::info!(db_path, "Record database ready");
    Ok(repo)
}

async fn serve<R>(config: &Config, records: R) -> anyhow::Result<()>
where
    R: RecordRepository + 'static,
{
    let state = AppState::new(
        Arc::new(InMemoryNameStore::new()),
        Arc::new(records),
        env!("CARGO_PKG_VERSION"),
    );
    let app = create_router(state);

    let addr = config.socket_addr()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /");
    tracing::info!("  POST /");
    tracing::info!("  GET  /api/");
    tracing::info!("  POST /api/");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
