use sqlx::MySqlPool;

pub async fn create_time_log_table(db: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS time_log (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            timestamp TIMESTAMP NOT NULL
        )",
    )
    .execute(db)
    .await?;

    Ok(())
}
