//! Sync configuration
//!
//! Endpoint URLs, batch limits and feed layout come from a YAML file;
//! credentials and campaign identifiers come from the environment (`.env`
//! supported) and never appear in YAML. Each binary loads only the
//! credentials of the marketplace it talks to.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarMissing(String),

    #[error("Environment variable {name} is invalid: {reason}")]
    EnvVarInvalid { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub feed: FeedConfig,
    pub ozon: OzonConfig,
    pub yandex: YandexConfig,
}

/// Supplier stock feed: a ZIP archive with one XLS spreadsheet inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    /// Name of the spreadsheet entry inside the archive.
    #[serde(default = "default_archive_entry")]
    pub archive_entry: String,
    /// Zero-based row index of the spreadsheet header row.
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default)]
    pub columns: FeedColumns,
}

/// Header captions of the columns the feed is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedColumns {
    pub code: String,
    pub quantity: String,
    pub price: String,
}

impl Default for FeedColumns {
    fn default() -> Self {
        Self {
            code: "Код".to_string(),
            quantity: "Количество".to_string(),
            price: "Цена".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OzonConfig {
    pub base_url: String,
    /// Items per product-list page.
    #[serde(default = "default_ozon_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_ozon_stock_batch")]
    pub stock_batch_size: usize,
    #[serde(default = "default_ozon_price_batch")]
    pub price_batch_size: usize,

    /// Client id from .env (not in YAML)
    #[serde(skip)]
    pub client_id: String,

    /// API key from .env (not in YAML)
    #[serde(skip)]
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexConfig {
    pub base_url: String,
    /// Items per offer-mappings page.
    #[serde(default = "default_yandex_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_yandex_stock_batch")]
    pub stock_batch_size: usize,
    #[serde(default = "default_yandex_price_batch")]
    pub price_batch_size: usize,

    /// OAuth token from .env (not in YAML)
    #[serde(skip)]
    pub token: String,

    /// Campaign/warehouse pairs from .env (not in YAML)
    #[serde(skip)]
    pub campaigns: Vec<CampaignTarget>,
}

/// One Yandex Market campaign with its fulfillment warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignTarget {
    pub label: String,
    pub campaign_id: String,
    pub warehouse_id: i64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_archive_entry() -> String {
    "ostatki.xls".to_string()
}

fn default_header_row() -> usize {
    17
}

fn default_ozon_page_limit() -> u32 {
    1000
}

fn default_ozon_stock_batch() -> usize {
    100
}

fn default_ozon_price_batch() -> usize {
    1000
}

fn default_yandex_page_limit() -> u32 {
    200
}

fn default_yandex_stock_batch() -> usize {
    2000
}

fn default_yandex_price_batch() -> usize {
    500
}

impl SyncConfig {
    /// Load configuration from YAML file and make .env available
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: SyncConfig = serde_yaml::from_str(&yaml_content)?;

        // Load .env for the credential lookups that follow
        dotenv::dotenv().ok();

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.feed.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.url cannot be empty".to_string(),
            ));
        }
        if self.feed.archive_entry.is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.archive_entry cannot be empty".to_string(),
            ));
        }
        if self.feed.columns.code.is_empty()
            || self.feed.columns.quantity.is_empty()
            || self.feed.columns.price.is_empty()
        {
            return Err(ConfigError::ValidationError(
                "feed.columns captions cannot be empty".to_string(),
            ));
        }

        if self.ozon.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "ozon.base_url cannot be empty".to_string(),
            ));
        }
        if self.yandex.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "yandex.base_url cannot be empty".to_string(),
            ));
        }

        if self.ozon.page_limit == 0 || self.yandex.page_limit == 0 {
            return Err(ConfigError::ValidationError(
                "page_limit must be greater than 0".to_string(),
            ));
        }
        if self.ozon.stock_batch_size == 0
            || self.ozon.price_batch_size == 0
            || self.yandex.stock_batch_size == 0
            || self.yandex.price_batch_size == 0
        {
            return Err(ConfigError::ValidationError(
                "batch sizes must be greater than 0".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Feed URL: {}", self.feed.url);
        info!("  Feed header row: {}", self.feed.header_row);
        info!("  Ozon API: {}", self.ozon.base_url);
        info!(
            "  Ozon batches: stocks {}, prices {}",
            self.ozon.stock_batch_size, self.ozon.price_batch_size
        );
        info!("  Yandex API: {}", self.yandex.base_url);
        info!(
            "  Yandex batches: stocks {}, prices {}",
            self.yandex.stock_batch_size, self.yandex.price_batch_size
        );
        info!("  Log level: {}", self.log_level);
    }
}

impl OzonConfig {
    /// Pull Ozon credentials from the environment
    pub fn load_credentials(&mut self) -> Result<()> {
        self.client_id = require_env("OZON_CLIENT_ID")?;
        self.api_key = require_env("OZON_API_KEY")?;
        Ok(())
    }
}

impl YandexConfig {
    /// Pull the Yandex token and both campaign targets from the environment
    pub fn load_credentials(&mut self) -> Result<()> {
        self.token = require_env("MARKET_TOKEN")?;
        self.campaigns = vec![
            CampaignTarget {
                label: "FBS".to_string(),
                campaign_id: require_env("FBS_CAMPAIGN_ID")?,
                warehouse_id: require_env_i64("FBS_WAREHOUSE_ID")?,
            },
            CampaignTarget {
                label: "DBS".to_string(),
                campaign_id: require_env("DBS_CAMPAIGN_ID")?,
                warehouse_id: require_env_i64("DBS_WAREHOUSE_ID")?,
            },
        ];
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| ConfigError::EnvVarMissing(name.to_string()))
}

fn require_env_i64(name: &str) -> Result<i64> {
    let raw = require_env(name)?;
    raw.parse::<i64>().map_err(|_| ConfigError::EnvVarInvalid {
        name: name.to_string(),
        reason: format!("'{}' is not an integer", raw),
    })
}
