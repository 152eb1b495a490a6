//! Configuration for the faculty summary service.

use std::time::Duration;

/// Directory API constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the author directory API.
    pub const DIRECTORY_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Caps applied when projecting directory results.
pub mod limits {
    /// Maximum candidate names returned by a faculty search.
    pub const MAX_FACULTY_RESULTS: usize = 5;

    /// Maximum publications included in a summary.
    pub const MAX_PUBLICATIONS: usize = 5;
}

/// Field sets requested from the directory.
pub mod fields {
    /// Fields for search candidates.
    pub const CANDIDATE: &[&str] = &["authorId", "name"];

    /// Fields for a full profile fill.
    pub const PROFILE: &[&str] = &[
        "authorId",
        "name",
        "affiliations",
        "url",
        "citationCount",
        "papers.title",
        "papers.year",
        "papers.citationCount",
    ];
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory API key (optional).
    pub api_key: Option<String>,

    /// Base URL for the directory API (overridable for mock servers).
    pub directory_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional directory API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            directory_api_url: api::DIRECTORY_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            directory_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var("AUTHOR_DIRECTORY_API_KEY").ok());
        if let Ok(url) = std::env::var("AUTHOR_DIRECTORY_URL") {
            config.directory_api_url = url;
        }
        config
    }

    /// Check if a directory API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
