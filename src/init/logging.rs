use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `level` is the configured default; `RUST_LOG` still takes precedence when set.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn default_directives(level: &str) -> String {
    format!("{},sqlx=warn", level.trim())
}
