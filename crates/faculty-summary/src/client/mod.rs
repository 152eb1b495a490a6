//! Author directory client.
//!
//! Thin async HTTP client over the scholarly-profile directory:
//! - Connection pooling via reqwest
//! - Structured error mapping for non-2xx responses
//!
//! Deliberately carries no cache, no retries, and no client-side rate
//! limiting: every call is a single outbound request and any fault is
//! surfaced to the operation layer.

use reqwest::Client;

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorProfile, AuthorSearchResult};

/// Author directory API client.
///
/// Stateless and cheap to clone; share one instance per process.
#[derive(Clone)]
pub struct AuthorDirectoryClient {
    /// HTTP client with pooled connections.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Directory API base URL.
    directory_api_url: String,
}

impl AuthorDirectoryClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().expect("valid content-type header"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_key: config.api_key, directory_api_url: config.directory_api_url })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for authors by name, returning at most `limit` candidates.
    ///
    /// The directory's lazy candidate stream is materialized here as a
    /// capped page: callers request exactly the prefix they consume.
    ///
    /// # Errors
    ///
    /// Returns error on directory failure.
    pub async fn search_authors(
        &self,
        query: &str,
        limit: usize,
    ) -> ClientResult<AuthorSearchResult> {
        let url = format!("{}/author/search", self.directory_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields::CANDIDATE.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Fetch the full profile for a candidate ("fill").
    ///
    /// # Errors
    ///
    /// Returns error on directory failure.
    pub async fn fetch_profile(&self, author_id: &str) -> ClientResult<AuthorProfile> {
        let url = format!("{}/author/{}", self.directory_api_url, author_id);
        let params = vec![("fields".to_string(), fields::PROFILE.join(","))];

        self.get(&url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Handle directory response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for AuthorDirectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorDirectoryClient")
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
