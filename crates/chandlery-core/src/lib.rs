//! Shared data model and configuration for the chandlery catalog workspace.

mod app_config;
pub mod categories;
mod config;
pub mod listing;
pub mod rows;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{default_categories, load_categories, CategoriesFile, CategoryConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{GroupedProduct, Listing, PriceRange, ProductGroup, VariantOptions};
pub use rows::{GroupedRow, StoredProduct};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read categories file {path}: {source}")]
    CategoriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse categories file: {0}")]
    CategoriesFileParse(#[source] serde_yaml::Error),

    #[error("invalid categories configuration: {0}")]
    Validation(String),
}
