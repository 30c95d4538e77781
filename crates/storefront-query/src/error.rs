use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("debouncer requires a running tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
