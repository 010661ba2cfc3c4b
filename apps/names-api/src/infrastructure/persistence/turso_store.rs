//! Turso-backed record repository.
//!
//! Stores name records in a local Turso (SQLite-compatible) database.
//! The `name_records` table is created on open if it does not exist.
//! `seq` is the rowid alias and fixes listing order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};
use turso::{Builder, Connection, Database, Value};

use crate::domain::records::{
    NameRecord, NewNameRecord, RecordId, RecordRepository, RecordStoreError,
};

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS name_records (
        seq INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
";

const INSERT_RECORD: &str =
    "INSERT INTO name_records (id, name, created_at) VALUES (?1, ?2, ?3)";

const SELECT_ALL: &str = "SELECT id, name, created_at FROM name_records ORDER BY seq";

/// Record repository on top of a Turso database.
pub struct TursoRecordRepository {
    /// Kept alive for the lifetime of the connection.
    _db: Database,
    conn: Mutex<Connection>,
}

impl TursoRecordRepository {
    /// Open (or create) the database at `path` and ensure the schema.
    ///
    /// `":memory:"` opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub async fn open(path: &str) -> Result<Self, RecordStoreError> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| RecordStoreError::Connection(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| RecordStoreError::Connection(e.to_string()))?;

        conn.execute(CREATE_TABLE, ())
            .await
            .map_err(|e| RecordStoreError::Query(e.to_string()))?;

        info!(db_path = path, "Turso record store opened");

        Ok(Self {
            _db: db,
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub async fn in_memory() -> Result<Self, RecordStoreError> {
        Self::open(":memory:").await
    }
}

#[async_trait]
impl RecordRepository for TursoRecordRepository {
    async fn create(&self, record: NewNameRecord) -> Result<NameRecord, RecordStoreError> {
        let record = record.into_record(RecordId::generate(), Utc::now());

        let conn = self.conn.lock().await;
        conn.execute(
            INSERT_RECORD,
            [
                Value::Text(record.id().to_string()),
                Value::Text(record.name().to_string()),
                Value::Text(record.created_at().to_rfc3339()),
            ],
        )
        .await
        .map_err(|e| RecordStoreError::Query(e.to_string()))?;

        debug!(record_id = %record.id(), "Record inserted");
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<NameRecord>, RecordStoreError> {
        let conn = self.conn.lock().await;
        let mut rows = conn
            .query(SELECT_ALL, ())
            .await
            .map_err(|e| RecordStoreError::Query(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| RecordStoreError::Query(e.to_string()))?
        {
            let id = text_column(row.get_value(0), "id")?;
            let name = text_column(row.get_value(1), "name")?;
            let created_at = text_column(row.get_value(2), "created_at")?;
            records.push(NameRecord::restore(
                RecordId::new(id),
                name,
                parse_timestamp(&created_at)?,
            ));
        }

        Ok(records)
    }
}

/// Extract a TEXT column value.
fn text_column(
    value: Result<Value, turso::Error>,
    column: &str,
) -> Result<String, RecordStoreError> {
    match value {
        Ok(Value::Text(text)) => Ok(text),
        Ok(other) => Err(RecordStoreError::Corrupt(format!(
            "{column}: expected text, got {other:?}"
        ))),
        Err(e) => Err(RecordStoreError::Corrupt(format!("{column}: {e}"))),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RecordStoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RecordStoreError::Corrupt(format!("created_at '{raw}': {e}")))
}
