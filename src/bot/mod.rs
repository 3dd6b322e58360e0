//! Discord front end: the [`StatsBot`] service object and its shared state.

pub mod commands;

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tokio::sync::Mutex;

use crate::api::hypixel::HypixelClient;
use crate::api::mojang::MojangClient;
use crate::api::wrapper::StatsLookup;
use crate::config::Config;
use crate::middleware::catcher;
use crate::render::CardRenderer;
use crate::util::header;

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Immutable state handed to every command invocation.
#[derive(Clone)]
pub struct Data {
    pub lookup: StatsLookup,
    pub renderer: CardRenderer,
}

impl Data {
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let client = header::build_client()?;
        let identity = MojangClient::new(client.clone(), config.mojang_api_url.clone());
        let stats = HypixelClient::new(
            client,
            config.hypixel_api_url.clone(),
            config.hypixel_api_key.clone(),
        );

        Ok(Data {
            lookup: StatsLookup::new(Arc::new(identity), Arc::new(stats)),
            renderer: CardRenderer::new(&config.background_path, &config.font_path),
        })
    }
}

/// The bot process. Construct it once, call [`start`](Self::start) to
/// connect and serve commands, and [`stop`](Self::stop) to disconnect.
pub struct StatsBot {
    token: String,
    data: Data,
    shard_manager: Mutex<Option<Arc<serenity::ShardManager>>>,
}

impl StatsBot {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(StatsBot {
            token: config.discord_token.clone(),
            data: Data::from_config(config)?,
            shard_manager: Mutex::new(None),
        })
    }

    /// Connect to the gateway and run until [`stop`](Self::stop) is called
    /// or the connection fails.
    pub async fn start(&self) -> Result<(), Error> {
        let data = self.data.clone();
        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: commands::all(),
                on_error: |error| Box::pin(catcher::on_error(error)),
                ..Default::default()
            })
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    tracing::info!(
                        user = %ready.user.name,
                        commands = framework.options().commands.len(),
                        "Bot is connected and ready"
                    );
                    Ok(data)
                })
            })
            .build();

        let mut client =
            serenity::ClientBuilder::new(&self.token, serenity::GatewayIntents::non_privileged())
                .framework(framework)
                .await?;

        *self.shard_manager.lock().await = Some(client.shard_manager.clone());
        client.start().await?;
        Ok(())
    }

    pub async fn stop(&self) {
        if let Some(manager) = self.shard_manager.lock().await.take() {
            tracing::info!("Disconnecting from Discord");
            manager.shutdown_all().await;
        }
    }
}
