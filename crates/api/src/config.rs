use shared_types::{AppConfig, ClientConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `config.toml` at the workspace root. Embedded because the web build has
/// no filesystem to read it from at runtime.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Build-time override for `api.base_url`.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("ERP_API_BASE_URL");

/// Parse a config document, falling back to defaults on any error.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> ClientConfig {
    let mut config = match toml::from_str::<AppConfig>(contents) {
        Ok(app) => app.api,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
            ClientConfig::default()
        }
    };
    if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.base_url = url.to_string();
    }
    config
}

/// Parse the embedded config once and cache it. Safe to call repeatedly.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(CONFIG_TOML, BASE_URL_OVERRIDE);
        tracing::info!(base_url = %config.base_url, "client config loaded");
        config
    })
}
