//! Server startup: assets directory, connection pool, listener.

use std::sync::Arc;

use tracing::info;

use crate::db;
use crate::router;
use crate::state::AppState;

/// Build `AppState` from config: ensure the assets directory exists (once, at
/// process start) and initialize the connection pool.
pub async fn build_app_state(config: &alumni_core::Config) -> anyhow::Result<Arc<AppState>> {
    let assets_dir = config.storage.assets_dir.clone();
    std::fs::create_dir_all(&assets_dir)?;
    info!("Assets directory ready: {}", assets_dir.display());

    let pg_pool = db::init_pg_pool(&config.postgres).await;

    Ok(Arc::new(AppState { pg_pool, assets_dir }))
}

pub async fn serve(config: &alumni_core::Config) -> anyhow::Result<()> {
    let state = build_app_state(config).await?;
    let app = router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
