use crate::app_config::{AppConfig, Environment};
use crate::filters::SortBy;
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
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"));
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "STOREFRONT_CATALOG_PATH",
        "./config/catalog.yaml",
    ));
    let search_debounce_ms = parse_u64("STOREFRONT_SEARCH_DEBOUNCE_MS", "300")?;
    let title_max_len = parse_usize("STOREFRONT_TITLE_MAX_LEN", "40")?;

    // Unlike query-time keys, the configured default must name a real strategy.
    let sort_key = or_default("STOREFRONT_DEFAULT_SORT", "newest");
    if !SortBy::is_known_key(&sort_key) && sort_key != SortBy::Original.as_str() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_DEFAULT_SORT".to_string(),
            reason: format!("unknown sort key \"{sort_key}\""),
        });
    }
    let default_sort = SortBy::parse(&sort_key);

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        search_debounce_ms,
        title_max_len,
        default_sort,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
