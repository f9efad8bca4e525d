//! Client configuration
//!
//! `ClientConfig` can be built in code or loaded from a YAML (or JSON) file:
//!
//! ```yaml
//! client_version: "2.20240101.00.00"
//! hl: de
//! gl: DE
//! max_retries: 1
//! visitor_data: CgtB...
//! rate_limit:
//!   requests_per_second: 2
//!   burst_size: 4
//! ```

use crate::error::{Error, Result};
use crate::http::{ClientContext, HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, API_BASE_URL, DEFAULT_CLIENT_VERSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const VISITOR_HEADER: &str = "X-Goog-Visitor-Id";

/// Configuration for [`Client`](crate::Client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Innertube API root
    pub base_url: String,

    /// Client name sent in the request context
    pub client_name: String,

    /// Client version sent in the request context
    pub client_version: String,

    /// Interface language
    pub hl: String,

    /// Content region
    pub gl: String,

    /// Per-request timeout
    pub timeout_secs: u64,

    /// Transport-level retries for throttling and server errors
    pub max_retries: u32,

    /// Transport retry backoff
    pub backoff: BackoffType,

    /// Request rate limit, `null` to disable
    pub rate_limit: Option<RateLimiterConfig>,

    /// Sent as `X-Goog-Visitor-Id` when set
    pub visitor_data: Option<String>,

    /// User agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            client_name: "WEB".to_string(),
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
            hl: "en".to_string(),
            gl: "US".to_string(),
            timeout_secs: 30,
            max_retries: 3,
            backoff: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            visitor_data: None,
            user_agent: format!("youtubei/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        content.parse()
    }

    /// Check required values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        url::Url::parse(&self.base_url)?;
        if self.client_name.is_empty() {
            return Err(Error::config("client_name cannot be empty"));
        }
        if self.client_version.is_empty() {
            return Err(Error::config("client_version cannot be empty"));
        }
        if let Some(limit) = &self.rate_limit {
            if limit.requests_per_second == 0 {
                return Err(Error::config(
                    "rate_limit.requests_per_second must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(250),
                Duration::from_secs(30),
            )
            .user_agent(&self.user_agent)
            .context(ClientContext {
                client_name: self.client_name.clone(),
                client_version: self.client_version.clone(),
                hl: self.hl.clone(),
                gl: self.gl.clone(),
            });

        builder = match self.rate_limit {
            Some(limit) => builder.rate_limit(limit),
            None => builder.no_rate_limit(),
        };
        if let Some(visitor) = &self.visitor_data {
            builder = builder.header(VISITOR_HEADER, visitor);
        }
        builder.build()
    }
}

impl std::str::FromStr for ClientConfig {
    type Err = Error;

    /// Parse YAML or JSON
    fn from_str(content: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
