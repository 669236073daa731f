use crate::{err::Error, store::TimeLogEntry, SharedState};
use axum::{
    extract::{ConnectInfo, Json, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;
use std::net::SocketAddr;

#[derive(Debug, Serialize)]
pub struct CurrentTime {
    pub current_time: String,
}

/// `GET /current-time`: record the current time and echo it back.
pub async fn record_current_time(
    State(state): State<SharedState>,
    remote: Option<ConnectInfo<SocketAddr>>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(remote = ?remote.map(|ConnectInfo(addr)| addr), "current time requested");

    let entry = TimeLogEntry::new(state.clock.now()?);
    state.store.insert(entry.timestamp.with_timezone(&Utc)).await?;
    tracing::info!(timestamp = %entry.rfc3339(), "time logged");

    Ok(Json(CurrentTime {
        current_time: entry.rfc3339(),
    }))
}
