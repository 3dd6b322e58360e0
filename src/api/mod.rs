pub mod hypixel;
pub mod mojang;
pub mod wrapper;

use async_trait::async_trait;

use crate::model::hypixel::PlayerResponse;
use crate::model::mojang::ProfileDTO;

/// Errors from the outbound HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network, DNS or TLS failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API returned status {status}")]
    Status { status: u16 },

    /// The body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Resolves a display name to a player identity.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// `Ok(None)` when no account has this name.
    async fn resolve(&self, name: &str) -> Result<Option<ProfileDTO>, ApiError>;
}

/// Fetches the stats document for a resolved player.
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    async fn fetch_player(&self, uuid: &str) -> Result<PlayerResponse, ApiError>;
}
