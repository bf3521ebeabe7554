use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Profile fields returned by the Clerk user-lookup API. Unknown fields
/// are ignored; both of these are nullable on the Clerk side.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityUser {
    pub username: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("identity provider returned {0}")]
    Status(StatusCode),
}

/// Outbound seam to the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the current profile for the given external user id.
    async fn fetch_user(&self, clerk_id: &str) -> Result<IdentityUser, IdentityError>;
}

/// Clerk REST API client
#[derive(Clone)]
pub struct ClerkClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ClerkClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl IdentityProvider for ClerkClient {
    async fn fetch_user(&self, clerk_id: &str) -> Result<IdentityUser, IdentityError> {
        let url = format!("{}/v1/users/{}", self.base_url, clerk_id);
        debug!(clerk_id, "fetching user from identity provider");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IdentityError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_and_decodes_a_user() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u_123"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "u_123",
                "username": "alice",
                "profile_image_url": "http://x/a.png",
                "last_sign_in_at": 1700000000
            })))
            .mount(&server)
            .await;

        let client = ClerkClient::new(&server.uri(), "test-key");
        let user = client.fetch_user("u_123").await.unwrap();

        assert_eq!(user.username.as_deref(), Some("alice"));
        assert_eq!(user.profile_image_url.as_deref(), Some("http://x/a.png"));
    }

    #[tokio::test]
    async fn non_2xx_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u_missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ClerkClient::new(&server.uri(), "test-key");
        let err = client.fetch_user("u_missing").await.unwrap_err();

        match err {
            IdentityError::Status(status) => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/users/u_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "username": null,
                "profile_image_url": null
            })))
            .mount(&server)
            .await;

        let client = ClerkClient::new(&format!("{}/", server.uri()), "test-key");
        let user = client.fetch_user("u_1").await.unwrap();

        assert!(user.username.is_none());
        assert!(user.profile_image_url.is_none());
    }
}
