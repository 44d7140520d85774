use std::sync::Arc;
use thiserror::Error;

/// Failure of a weather or IP lookup.
///
/// Cloneable so that one deduplicated fetch can hand the same outcome to
/// every caller waiting on it.
#[derive(Error, Debug, Clone)]
pub enum WeatherError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("HTTP request failed: {0}")]
    Transport(Arc<reqwest::Error>),
    #[error("API error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("JSON parsing failed: {0}")]
    Parse(Arc<serde_json::Error>),
    #[error("fetch task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(Arc::new(err))
    }
}

/// Outcome of a cache-backed fetch, shared between weather and IP lookups.
pub type FetchOutcome<T> = Result<Arc<T>, WeatherError>;
