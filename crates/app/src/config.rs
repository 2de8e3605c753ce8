//! Process configuration.

use vitrine_content::ContentConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Top-level settings: where to listen, plus everything needed to reach
/// the content repository.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub content: ContentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            content: ContentConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read settings from the environment; anything unset keeps its
    /// default.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("VITRINE_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            content: ContentConfig::from_env(),
        }
    }
}
