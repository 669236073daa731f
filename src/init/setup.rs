use crate::{api, err::Error, init::settings::Settings};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};

/// Open the connection pool and make sure the database answers.
///
/// # Arguments
/// * `settings` - Database connection details, pool size and connect timeout
///
/// # Returns
/// * A connected `MySqlPool`
/// * An error if the database is unreachable or the schema bootstrap fails
pub async fn setup_database(settings: &Settings) -> Result<MySqlPool, Error> {
    tracing::info!("Connecting to {}", settings.database_url());

    let db = MySqlPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .acquire_timeout(settings.connect_timeout())
        .connect_with(settings.connect_options())
        .await?;

    sqlx::query("SELECT 1").execute(&db).await?;
    tracing::info!("Successfully connected to database");

    if settings.init_schema {
        api::setup::create_time_log_table(&db).await?;
        tracing::info!("time_log table ready");
    }

    Ok(db)
}
