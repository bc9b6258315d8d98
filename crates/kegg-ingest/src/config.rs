// KEGG REST API Configuration

use kegg_common::{KeggError, Result};
use serde::{Deserialize, Serialize};

/// Default KEGG REST endpoint
pub const DEFAULT_BASE_URL: &str = "http://rest.kegg.jp";

/// Maximum number of identifiers the `get` operation accepts per request
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Configuration for remote record retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeggApiConfig {
    /// Base URL of the REST service, without trailing slash
    pub base_url: String,

    /// Identifiers joined into a single `get` request
    pub batch_size: usize,

    /// HTTP timeout in seconds, applied per request by the shared client
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for KeggApiConfig {
    fn default() -> Self {
        KeggApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_secs: 60,
            user_agent: "kegg-ingest/0.1".to_string(),
        }
    }
}

impl KeggApiConfig {
    pub fn builder() -> KeggApiConfigBuilder {
        KeggApiConfigBuilder::default()
    }

    /// URL of the `get` operation for a group of identifiers
    pub fn get_url<S: AsRef<str>>(&self, ids: &[S]) -> String {
        let joined = ids.iter().map(|id| id.as_ref()).collect::<Vec<&str>>().join("+");
        format!("{}/get/{}", self.base_url.trim_end_matches('/'), joined)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(KeggError::Config("Base URL cannot be empty".to_string()));
        }

        if self.batch_size == 0 {
            return Err(KeggError::Config("Batch size must be greater than 0".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(KeggError::Config("Timeout must be greater than 0".to_string()));
        }

        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// - `KEGG_BASE_URL`
    /// - `KEGG_BATCH_SIZE`
    /// - `KEGG_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let default = KeggApiConfig::default();
        KeggApiConfig {
            base_url: std::env::var("KEGG_BASE_URL").unwrap_or(default.base_url),
            batch_size: std::env::var("KEGG_BATCH_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.batch_size),
            timeout_secs: std::env::var("KEGG_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
            user_agent: default.user_agent,
        }
    }
}

/// Builder for KeggApiConfig
#[derive(Debug, Default)]
pub struct KeggApiConfigBuilder {
    base_url: Option<String>,
    batch_size: Option<usize>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl KeggApiConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> KeggApiConfig {
        let default = KeggApiConfig::default();

        KeggApiConfig {
            base_url: self.base_url.unwrap_or(default.base_url),
            batch_size: self.batch_size.unwrap_or(default.batch_size),
            timeout_secs: self.timeout_secs.unwrap_or(default.timeout_secs),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}
