use std::sync::Arc;

use super::{ApiError, IdentityResolver, StatsFetcher};
use crate::model::bedwars::BedwarsProfile;
use crate::render::RenderError;
use crate::util::message;

/// Every way a `/bw` lookup can fail. Each kind has a fixed reply text.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("player not found")]
    PlayerNotFound,

    #[error("stats service unavailable: {0}")]
    StatsUnavailable(#[source] ApiError),

    #[error("stats service reported failure: {}", .cause.as_deref().unwrap_or("no cause given"))]
    StatsUnsuccessful { cause: Option<String> },

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Other(String),
}

impl LookupError {
    /// Text sent back to the invoking user.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::PlayerNotFound => message::MESSAGE_PLAYER_NOT_FOUND.to_string(),
            LookupError::StatsUnavailable(_) => message::MESSAGE_STATS_UNAVAILABLE.to_string(),
            LookupError::StatsUnsuccessful { .. } => message::MESSAGE_STATS_UNSUCCESSFUL.to_string(),
            LookupError::Render(_) => message::MESSAGE_RENDER_FAILED.to_string(),
            LookupError::Other(detail) => message::error_occurred(detail),
        }
    }

    /// Failures caused by the input rather than by us or upstream.
    pub fn is_expected(&self) -> bool {
        matches!(self, LookupError::PlayerNotFound)
    }
}

/// Username → identity → Bedwars stats.
#[derive(Clone)]
pub struct StatsLookup {
    identity: Arc<dyn IdentityResolver>,
    stats: Arc<dyn StatsFetcher>,
}

impl StatsLookup {
    pub fn new(identity: Arc<dyn IdentityResolver>, stats: Arc<dyn StatsFetcher>) -> Self {
        StatsLookup { identity, stats }
    }

    pub async fn lookup(&self, username: &str) -> Result<BedwarsProfile, LookupError> {
        let profile = self
            .identity
            .resolve(username)
            .await
            .map_err(|e| LookupError::Other(e.to_string()))?
            .ok_or(LookupError::PlayerNotFound)?;

        tracing::info!(username, canonical = %profile.name, uuid = %profile.id, "Resolved player");

        let resp = self
            .stats
            .fetch_player(&profile.id)
            .await
            .map_err(LookupError::StatsUnavailable)?;

        if !resp.success {
            return Err(LookupError::StatsUnsuccessful { cause: resp.cause });
        }
        let player = resp.player.ok_or(LookupError::PlayerNotFound)?;

        Ok(BedwarsProfile {
            level: player.bedwars_level(),
            stats: player.stats.bedwars,
            name: username.to_string(),
            uuid: profile.id,
        })
    }
}
