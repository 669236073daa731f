use crate::err::Error;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use sqlx::{MySqlPool, Row};

/// A single row of the append-only `time_log` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLogEntry {
    pub timestamp: DateTime<FixedOffset>,
}

impl TimeLogEntry {
    pub fn new(timestamp: DateTime<FixedOffset>) -> Self {
        Self { timestamp }
    }

    /// RFC 3339 with seconds precision and a numeric offset, e.g. `2024-01-02T15:04:05-05:00`.
    pub fn rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

/// Persistence for time log entries.
///
/// Entries are only ever inserted and read back; there is no update or delete.
#[async_trait]
pub trait TimeLogStore: Send + Sync {
    /// Append one entry.
    async fn insert(&self, at: DateTime<Utc>) -> Result<(), Error>;

    /// Up to `limit` entries, newest first.
    ///
    /// A failed query is an `Err` for the whole call. Each returned row carries
    /// its own decode result so the caller decides what to do with bad rows.
    async fn recent(&self, limit: u32) -> Result<Vec<Result<DateTime<Utc>, Error>>, Error>;
}

/// Only `timestamp` is referenced; the identity column's name is not assumed.
const SELECT_RECENT: &str = "SELECT timestamp FROM time_log ORDER BY timestamp DESC LIMIT ?";

/// `TimeLogStore` backed by a pooled MySQL connection.
#[derive(Clone)]
pub struct MySqlStore {
    db: MySqlPool,
}

impl MySqlStore {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimeLogStore for MySqlStore {
    async fn insert(&self, at: DateTime<Utc>) -> Result<(), Error> {
        sqlx::query("INSERT INTO time_log (timestamp) VALUES (?)")
            .bind(at)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Result<DateTime<Utc>, Error>>, Error> {
        let rows = sqlx::query(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.db)
            .await?;

        Ok(rows
            .iter()
            .map(|row| row.try_get::<DateTime<Utc>, _>("timestamp").map_err(Error::from))
            .collect())
    }
}
