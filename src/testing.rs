use crate::{clock::Clock, err::Error, store::TimeLogStore};
use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::{
    cmp::Reverse,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

pub async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `None` stands for a row whose timestamp cannot be decoded.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<Option<DateTime<Utc>>>>>,
}

impl MemoryStore {
    pub fn push(&self, at: DateTime<Utc>) {
        self.rows.lock().unwrap().push(Some(at));
    }

    pub fn push_corrupt(&self) {
        self.rows.lock().unwrap().push(None);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TimeLogStore for MemoryStore {
    async fn insert(&self, at: DateTime<Utc>) -> Result<(), Error> {
        self.push(at);
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Result<DateTime<Utc>, Error>>, Error> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|row| Reverse(*row));

        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|row| {
                row.ok_or_else(|| Error::from(sqlx::Error::ColumnNotFound("timestamp".into())))
            })
            .collect())
    }
}

/// Behaves like a severed database connection.
pub struct FailingStore;

#[async_trait]
impl TimeLogStore for FailingStore {
    async fn insert(&self, _at: DateTime<Utc>) -> Result<(), Error> {
        Err(Error::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn recent(&self, _limit: u32) -> Result<Vec<Result<DateTime<Utc>, Error>>, Error> {
        Err(Error::Sqlx(sqlx::Error::PoolClosed))
    }
}

pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// 2024-01-02 15:04:05 at UTC-5.
    pub fn toronto_winter() -> Self {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        Self {
            now: offset.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, Error> {
        Ok(self.now)
    }

    fn localize(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        at.with_timezone(self.now.offset())
    }
}

pub struct FailingClock;

impl Clock for FailingClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, Error> {
        Err(Error::Timezone("zone database unavailable".into()))
    }

    fn localize(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        at.fixed_offset()
    }
}
