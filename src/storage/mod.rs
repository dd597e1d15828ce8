//! SQLite persistence for findings: one serialized write connection,
//! idempotent schema, metadata stored as JSON text.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{named_params, params, Connection, Row};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::classifier::RiskStatus;
use crate::error::StorageError;
use crate::finding::Finding;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS crypto_assets (
        id TEXT PRIMARY KEY,
        type TEXT NOT NULL,
        algorithm TEXT NOT NULL,
        location TEXT NOT NULL,
        status TEXT NOT NULL,
        owner_team TEXT,
        expiration_date TEXT,
        discovery_timestamp TEXT NOT NULL,
        metadata TEXT
    )
";

const SELECT_COLUMNS: &str = "id, type, algorithm, location, status, owner_team, \
                              expiration_date, discovery_timestamp, metadata";

/// Durable store of findings.
///
/// `store` takes `&mut self`, so writes on one store are serialized by
/// construction. Records are never overwritten; there is no update path.
pub struct AssetStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl AssetStore {
    /// Open (creating if absent) a database file and ensure the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| StorageError::open_error(path, e.to_string()))?;
        init_schema(&conn)?;
        debug!(path = %path.display(), "asset store opened");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::open_error(":memory:", e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// The database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Persist a finding, assigning it a fresh id and discovery timestamp.
    pub fn store(&mut self, finding: &Finding) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        let discovered_at = Utc::now();

        let metadata = serde_json::to_string(&finding.metadata)
            .map_err(|e| StorageError::insert_error(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO crypto_assets \
                 (id, type, algorithm, location, status, owner_team, \
                  expiration_date, discovery_timestamp, metadata) \
                 VALUES (:id, :type, :algorithm, :location, :status, :owner_team, \
                         :expiration_date, :discovery_timestamp, :metadata)",
                named_params! {
                    ":id": id.to_string(),
                    ":type": finding.kind,
                    ":algorithm": finding.algorithm,
                    ":location": finding.location,
                    ":status": finding.status.as_str(),
                    ":owner_team": finding.owner_team,
                    ":expiration_date": finding.expiration_date,
                    ":discovery_timestamp": discovered_at.to_rfc3339(),
                    ":metadata": metadata,
                },
            )
            .map_err(|e| StorageError::insert_error(e.to_string()))?;

        trace!(id = %id, kind = %finding.kind, "finding stored");
        Ok(id)
    }

    /// All findings, newest discovery first.
    pub fn query_all(&self) -> Result<Vec<Finding>, StorageError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM crypto_assets \
             ORDER BY discovery_timestamp DESC, rowid DESC"
        );
        self.query(&sql, params![])
    }

    /// Findings with the given status, newest discovery first.
    pub fn query_by_status(&self, status: RiskStatus) -> Result<Vec<Finding>, StorageError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM crypto_assets WHERE status = ?1 \
             ORDER BY discovery_timestamp DESC, rowid DESC"
        );
        self.query(&sql, params![status.as_str()])
    }

    fn query<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Finding>, StorageError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| StorageError::query_error(e.to_string()))?;

        let rows = stmt
            .query_map(params, row_to_finding)
            .map_err(|e| StorageError::query_error(e.to_string()))?;

        let mut findings = Vec::new();
        for row in rows {
            findings.push(row.map_err(|e| StorageError::query_error(e.to_string()))?);
        }
        Ok(findings)
    }
}

fn init_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(SCHEMA, ())
        .map_err(|e| StorageError::schema_error(e.to_string()))?;
    Ok(())
}

fn row_to_finding(row: &Row<'_>) -> rusqlite::Result<Finding> {
    let id: String = row.get(0)?;
    let status: String = row.get(4)?;
    let discovered_at: String = row.get(7)?;
    let metadata: String = row.get(8)?;

    let id = Uuid::parse_str(&id).map_err(|e| decode_error(0, e))?;
    let status = RiskStatus::from_str(&status)
        .map_err(|_| decode_error(4, StorageError::UnknownStatus { status }))?;
    let discovered_at = DateTime::parse_from_rfc3339(&discovered_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| decode_error(7, e))?;
    let metadata = serde_json::from_str(&metadata).map_err(|e| {
        decode_error(
            8,
            StorageError::MetadataDecodeError {
                id: id.to_string(),
                message: e.to_string(),
            },
        )
    })?;

    Ok(Finding {
        id: Some(id),
        kind: row.get(1)?,
        algorithm: row.get(2)?,
        location: row.get(3)?,
        status,
        owner_team: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        expiration_date: row.get(6)?,
        discovered_at: Some(discovered_at),
        metadata,
    })
}

fn decode_error<E>(column: usize, source: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(
        column,
        rusqlite::types::Type::Text,
        Box::new(source),
    )
}
