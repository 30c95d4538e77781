use std::path::PathBuf;

use crate::filters::SortBy;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog_path: PathBuf,
    /// Quiet period before a burst of filter edits triggers a query.
    pub search_debounce_ms: u64,
    /// Character budget for product titles on listing cards.
    pub title_max_len: usize,
    pub default_sort: SortBy,
}
