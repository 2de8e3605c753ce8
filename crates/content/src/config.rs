//! Connection settings for the content repository.

use std::time::Duration;

/// Project the storefront reads from when nothing else is configured.
const DEFAULT_PROJECT_ID: &str = "abxbskhb";
const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2025-01-13";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for reaching the content repository.
///
/// `project_id`, `dataset` and `api_version` pin the deployment the
/// storefront reads from. `use_cdn` selects the cached edge host over the
/// live API host. `base_url`, when set, bypasses host construction entirely
/// (stub servers in tests, proxies in air-gapped setups).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: true,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ContentConfig {
    /// Read settings from the environment, falling back to the deployment
    /// defaults for anything unset. Unparseable values are logged and
    /// replaced by their defaults rather than failing startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let use_cdn = match std::env::var("CONTENT_USE_CDN") {
            Ok(raw) => raw.parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "CONTENT_USE_CDN is not a bool; using CDN");
                defaults.use_cdn
            }),
            Err(_) => defaults.use_cdn,
        };

        let timeout = match std::env::var("CONTENT_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    tracing::warn!(value = %raw, "CONTENT_TIMEOUT_SECS is not a number; using default");
                    defaults.timeout
                }
            },
            Err(_) => defaults.timeout,
        };

        Self {
            project_id: std::env::var("CONTENT_PROJECT_ID").unwrap_or(defaults.project_id),
            dataset: std::env::var("CONTENT_DATASET").unwrap_or(defaults.dataset),
            api_version: std::env::var("CONTENT_API_VERSION").unwrap_or(defaults.api_version),
            use_cdn,
            base_url: std::env::var("CONTENT_BASE_URL").ok(),
            timeout,
        }
    }

    /// Root URL for API requests: the override when present, otherwise the
    /// CDN or live host for the configured project.
    pub fn endpoint_base(&self) -> String {
        if let Some(base) = &self.base_url {
            return base.trim_end_matches('/').to_string();
        }
        let host = if self.use_cdn { "apicdn.sanity.io" } else { "api.sanity.io" };
        format!("https://{}.{host}", self.project_id)
    }

    /// Full URL of the query endpoint for the configured dataset.
    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.endpoint_base(),
            self.api_version,
            self.dataset
        )
    }
}
