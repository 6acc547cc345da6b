use anyhow::Result;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MAX_CONNECT_ATTEMPTS: u32 = 4;

/// Creates and returns a PostgreSQL connection pool.
/// Retries on failure with exponential backoff so the service survives the
/// database coming up slower than the API container.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let mut last_error: Option<sqlx::Error> = None;

    for attempt in 0..MAX_CONNECT_ATTEMPTS {
        if attempt > 0 {
            // Exponential backoff: 1s, 2s, 4s
            let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
            warn!(
                "PostgreSQL connect attempt {} failed, retrying after {}ms...",
                attempt,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }

        match PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("PostgreSQL connection pool established");
                return Ok(pool);
            }
            Err(e) => {
                last_error = Some(e);
            }
        }
    }

    Err(anyhow::anyhow!(
        "Failed to connect to PostgreSQL after {MAX_CONNECT_ATTEMPTS} attempts: {}",
        last_error.expect("at least one connect attempt was made")
    ))
}

/// Applies pending migrations from the `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    info!("Database migrations up to date");
    Ok(())
}
