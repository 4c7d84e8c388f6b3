use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the catalog tooling, read from `CHANDLERY_*` env vars.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON array of scraped listings used when no explicit input is given.
    pub listings_path: PathBuf,
    /// Optional YAML category taxonomy; the built-in taxonomy is used when absent.
    pub categories_path: Option<PathBuf>,
    /// Value written to `StoredProduct::source` during sync.
    pub source: String,
    pub default_per_page: usize,
    pub max_per_page: usize,
}
