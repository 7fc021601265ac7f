//! Frontend configuration.
//!
//! An embedded TOML default, optionally replaced by a TOML document stored in
//! `localStorage` under [`CONFIG_STORAGE_KEY`] (handy for pointing a build at another
//! backend without rebuilding).

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_STORAGE_KEY: &str = "admin_panel_config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub orders: OrdersListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port, appended to the host the page was served from
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrdersListConfig {
    #[serde(default = "default_orders_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_orders_endpoint() -> String {
    "/api/v1/get-all-booking-orders".to_string()
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 20, 30, 40, 50]
}

fn default_search_debounce_ms() -> u32 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for OrdersListConfig {
    fn default() -> Self {
        Self {
            endpoint: default_orders_endpoint(),
            page_size_options: default_page_size_options(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[orders]
endpoint = "/api/v1/get-all-booking-orders"
page_size_options = [10, 20, 30, 40, 50]
search_debounce_ms = 300
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(source)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let orders = &config.orders;
    if orders.page_size_options.is_empty() {
        return Err(ConfigError::Invalid(
            "orders.page_size_options must not be empty".to_string(),
        ));
    }
    if orders.page_size_options.contains(&0) {
        return Err(ConfigError::Invalid(
            "orders.page_size_options must be positive".to_string(),
        ));
    }
    if !orders.endpoint.starts_with('/') {
        return Err(ConfigError::Invalid(format!(
            "orders.endpoint must be an absolute path, got '{}'",
            orders.endpoint
        )));
    }
    Ok(())
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage[CONFIG_STORAGE_KEY]`
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<Config, ConfigError> {
    if let Some(stored) = stored_override() {
        log::info!("Loading config from localStorage '{}'", CONFIG_STORAGE_KEY);
        return parse_config(&stored);
    }
    log::debug!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}
