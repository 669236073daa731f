pub mod current_time;
pub mod setup;
pub mod time_logs;

/// Maximum number of entries returned by `GET /time-logs`.
pub const RECENT_LIMIT: u32 = 100;
