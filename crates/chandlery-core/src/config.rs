use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("CHANDLERY_ENV", "development"))?;
    let log_level = or_default("CHANDLERY_LOG_LEVEL", "info");
    let listings_path = PathBuf::from(or_default(
        "CHANDLERY_LISTINGS_PATH",
        "./data/products.json",
    ));
    let categories_path = lookup("CHANDLERY_CATEGORIES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let source = or_default("CHANDLERY_SOURCE", "nautichandler");

    let default_per_page = parse_usize("CHANDLERY_DEFAULT_PER_PAGE", "20")?;
    let max_per_page = parse_usize("CHANDLERY_MAX_PER_PAGE", "100")?;

    if max_per_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CHANDLERY_MAX_PER_PAGE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if default_per_page == 0 || default_per_page > max_per_page {
        return Err(ConfigError::InvalidEnvVar {
            var: "CHANDLERY_DEFAULT_PER_PAGE".to_string(),
            reason: format!("must be between 1 and {max_per_page}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        listings_path,
        categories_path,
        source,
        default_per_page,
        max_per_page,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CHANDLERY_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
