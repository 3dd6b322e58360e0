use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ApiError, IdentityResolver};
use crate::model::mojang::ProfileDTO;

pub const MAX_NAME_LEN: usize = 16;

/// Mojang profile lookup by username.
#[derive(Debug, Clone)]
pub struct MojangClient {
    client: reqwest::Client,
    base_url: String,
}

impl MojangClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        MojangClient {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn profile_url(&self, name: &str) -> String {
        format!("{}/users/profiles/minecraft/{}", self.base_url, name)
    }
}

/// Usernames are ASCII letters, digits and underscores. Anything else can
/// never resolve, and must not be spliced into the request path.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[async_trait]
impl IdentityResolver for MojangClient {
    async fn resolve(&self, name: &str) -> Result<Option<ProfileDTO>, ApiError> {
        if !is_valid_name(name) {
            tracing::debug!(username = name, "Rejected malformed username");
            return Ok(None);
        }

        let resp = self.client.get(self.profile_url(name)).send().await?;
        if resp.status() != StatusCode::OK {
            tracing::debug!(username = name, status = resp.status().as_u16(), "Profile lookup missed");
            return Ok(None);
        }

        let body = resp.bytes().await?;
        let profile = serde_json::from_slice::<ProfileDTO>(&body)?;
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Notch"));
        assert!(is_valid_name("the_real_1"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name("with space"));
        assert!(!is_valid_name("ñandú"));
        assert!(!is_valid_name(&"x".repeat(MAX_NAME_LEN + 1)));
    }

    #[test]
    fn test_name_length_limit() {
        assert!(is_valid_name("sixteen_chars_ok"));
        assert!(!is_valid_name("seventeen_chars_x"));
    }

    #[test]
    fn test_profile_url() {
        let client = MojangClient::new(reqwest::Client::new(), "https://api.mojang.com");
        assert_eq!(
            client.profile_url("Notch"),
            "https://api.mojang.com/users/profiles/minecraft/Notch"
        );
    }

    #[tokio::test]
    async fn test_malformed_name_skips_request() {
        // Unroutable base URL: reaching the network would be an error.
        let client = MojangClient::new(reqwest::Client::new(), "http://127.0.0.1:0");
        assert!(client.resolve("no/such name").await.unwrap().is_none());
    }
}
