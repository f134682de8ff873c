use serde::{Deserialize, Serialize};

/// Backend connection settings for the client.
///
/// Loaded from the `[api]` table of `config.toml`. Every field has a
/// default so a missing or partial file still yields a usable client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL the `/{role}/my-details` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `localStorage` key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_storage_key: String,
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_token_key() -> String {
    "userToken".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_storage_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Join the base URL and an absolute API path without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ClientConfig,
}
