use chrono::Local;
use poise::serenity_prelude as serenity;
use poise::CreateReply;

use super::{Context, Data, Error};
use crate::api::wrapper::LookupError;
use crate::model::reply::StatsReply;
use crate::render::RenderedCard;
use crate::util::message;

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![bedwars_stats(), ping()]
}

/// Look up `username`, render the card and compose the embed. Either both
/// the embed and the card come back, or an error does.
pub async fn stats_reply(
    data: &Data,
    username: &str,
) -> Result<(StatsReply, RenderedCard), LookupError> {
    let profile = data.lookup.lookup(username).await?;
    let card = data
        .renderer
        .render_blocking(profile.stats, profile.name.clone(), profile.level)
        .await?;
    let reply = StatsReply::compose(&profile, card.filename, &Local::now());
    Ok((reply, card))
}

pub fn to_embed(reply: &StatsReply) -> serenity::CreateEmbed {
    reply.fields.iter().fold(
        serenity::CreateEmbed::new()
            .title(&reply.title)
            .colour(reply.color)
            .image(&reply.image)
            .footer(serenity::CreateEmbedFooter::new(&reply.footer)),
        |embed, field| embed.field(&field.name, &field.value, field.inline),
    )
}

/// Display Bedwars statistics for a player
#[poise::command(slash_command, rename = "bw")]
pub async fn bedwars_stats(
    ctx: Context<'_>,
    #[description = "Minecraft username"] username: String,
) -> Result<(), Error> {
    ctx.defer().await?;

    let reply = match stats_reply(ctx.data(), &username).await {
        Ok((stats, card)) => CreateReply::default()
            .embed(to_embed(&stats))
            .attachment(serenity::CreateAttachment::bytes(card.bytes, card.filename)),
        Err(e) => {
            if e.is_expected() {
                tracing::warn!(username = %username, error = %e, "Stats lookup failed");
            } else {
                tracing::error!(username = %username, error = %e, "Stats lookup failed");
            }
            CreateReply::default().content(e.user_message())
        }
    };

    ctx.send(reply).await?;
    Ok(())
}

/// Display bot's latency
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(message::latency(latency.as_millis())).await?;
    Ok(())
}
