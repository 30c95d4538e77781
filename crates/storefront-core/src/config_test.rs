use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_from_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.yaml"));
    assert_eq!(cfg.search_debounce_ms, 300);
    assert_eq!(cfg.title_max_len, 40);
    assert_eq!(cfg.default_sort, SortBy::Newest);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_ENV", "production");
    map.insert("STOREFRONT_LOG_LEVEL", "debug");
    map.insert("STOREFRONT_CATALOG_PATH", "/srv/storefront/catalog.yaml");
    map.insert("STOREFRONT_SEARCH_DEBOUNCE_MS", "150");
    map.insert("STOREFRONT_TITLE_MAX_LEN", "24");
    map.insert("STOREFRONT_DEFAULT_SORT", "popular");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.catalog_path.to_str(),
        Some("/srv/storefront/catalog.yaml")
    );
    assert_eq!(cfg.search_debounce_ms, 150);
    assert_eq!(cfg.title_max_len, 24);
    assert_eq!(cfg.default_sort, SortBy::Popular);
}

#[test]
fn build_app_config_accepts_original_sort() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_DEFAULT_SORT", "original");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_sort, SortBy::Original);
}

#[test]
fn build_app_config_rejects_unknown_default_sort() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_DEFAULT_SORT", "cheapest");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_DEFAULT_SORT"),
        "expected InvalidEnvVar(STOREFRONT_DEFAULT_SORT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_debounce() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_SEARCH_DEBOUNCE_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_SEARCH_DEBOUNCE_MS"),
        "expected InvalidEnvVar(STOREFRONT_SEARCH_DEBOUNCE_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_negative_title_len() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_TITLE_MAX_LEN", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_TITLE_MAX_LEN"),
        "expected InvalidEnvVar(STOREFRONT_TITLE_MAX_LEN), got: {result:?}"
    );
}
