use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bedwars_bot::bot::StatsBot;
use bedwars_bot::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(?config, "Loaded configuration");

    let bot = Arc::new(StatsBot::new(&config)?);

    let shutdown = bot.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.stop().await;
        }
    });

    bot.start().await
}
