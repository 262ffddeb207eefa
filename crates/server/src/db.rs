use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

/// Create a PostgreSQL connection pool and run migrations.
/// Returns None if Postgres is not configured.
pub async fn init_pg_pool(config: &alumni_core::config::PostgresConfig) -> Option<PgPool> {
    if !config.configured {
        warn!("PG_URL/PG_HOST not configured — database-backed routes disabled");
        return None;
    }

    let url = config.connection_string();
    match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&url)
        .await
    {
        Ok(pool) => {
            info!("PostgreSQL connected: {}", config.host);
            match sqlx::migrate!("../../migrations").run(&pool).await {
                Ok(_) => {
                    info!("Database migrations applied successfully");
                    Some(pool)
                }
                Err(e) => {
                    warn!("Failed to run migrations: {} — database routes disabled", e);
                    None
                }
            }
        }
        Err(e) => {
            warn!(
                "Failed to connect to PostgreSQL: {} — database routes disabled",
                e
            );
            None
        }
    }
}
