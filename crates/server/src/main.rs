mod api;
mod db;
mod intake;
mod router;
mod startup;
mod state;
mod writer;


use tracing::info;

fn load_config() -> alumni_core::Config {
    alumni_core::config::load_dotenv();
    alumni_core::Config::from_env()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = load_config();
    config.log_summary();

    info!("Starting alumni registry server");
    startup::serve(&config).await
}
