pub mod app_config;
pub mod config;
pub mod records;

pub use app_config::CrawlerConfig;
pub use config::{load_config, load_config_from_env};
pub use records::{AccountType, AdsTxt, CrawlResult, SellerRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
