use crate::{api::RECENT_LIMIT, clock::Clock, err::Error, store::TimeLogEntry, SharedState};
use axum::{
    extract::{ConnectInfo, Json, State},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;

/// `GET /time-logs`: the most recent entries, newest first.
pub async fn list_recent_times(
    State(state): State<SharedState>,
    remote: Option<ConnectInfo<SocketAddr>>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(remote = ?remote.map(|ConnectInfo(addr)| addr), "time logs requested");

    let rows = state.store.recent(RECENT_LIMIT).await?;
    let logs = collect_entries(state.clock.as_ref(), rows)
        .iter()
        .map(TimeLogEntry::rfc3339)
        .collect::<Vec<String>>();

    Ok(Json(logs))
}

/// Rows that fail to decode are logged and dropped; the rest are still returned.
pub fn collect_entries(
    clock: &dyn Clock,
    rows: Vec<Result<DateTime<Utc>, Error>>,
) -> Vec<TimeLogEntry> {
    rows.into_iter()
        .filter_map(|row| match row {
            Ok(at) => Some(TimeLogEntry::new(clock.localize(at))),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable time log row");
                None
            }
        })
        .collect()
}
