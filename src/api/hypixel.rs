use async_trait::async_trait;

use super::{ApiError, StatsFetcher};
use crate::model::hypixel::PlayerResponse;
use crate::util::header::HYPIXEL_KEY_HEADER;

/// Hypixel public API, authenticated with a static key.
#[derive(Clone)]
pub struct HypixelClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HypixelClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        HypixelClient {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn player_url(&self) -> String {
        format!("{}/player", self.base_url)
    }
}

impl std::fmt::Debug for HypixelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HypixelClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StatsFetcher for HypixelClient {
    async fn fetch_player(&self, uuid: &str) -> Result<PlayerResponse, ApiError> {
        let resp = self
            .client
            .get(self.player_url())
            .query(&[("uuid", uuid)])
            .header(HYPIXEL_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice::<PlayerResponse>(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_url() {
        let client = HypixelClient::new(reqwest::Client::new(), "https://api.hypixel.net", "key");
        assert_eq!(client.player_url(), "https://api.hypixel.net/player");
    }

    #[test]
    fn test_debug_hides_key() {
        let client = HypixelClient::new(reqwest::Client::new(), "https://api.hypixel.net", "secret-key");
        assert!(!format!("{:?}", client).contains("secret-key"));
    }
}
