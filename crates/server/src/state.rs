use std::path::PathBuf;

use sqlx::PgPool;

pub struct AppState {
    /// None when Postgres is not configured — DB-backed routes answer 503.
    pub pg_pool: Option<PgPool>,
    /// Flat directory where uploaded files are stored.
    pub assets_dir: PathBuf,
}
