// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while refreshing the cache. No variant is
/// retried; each failure propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("invalid response format from Google Sheets")]
    InvalidFormat,

    #[error("failed to decode sheet response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to fetch {name}: {status}")]
    FetchStatus { name: String, status: StatusCode },

    #[error("request for {name} failed: {source}")]
    Transport {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {dataset} dataset: {source}")]
    Dataset {
        dataset: String,
        #[source]
        source: Box<CacheError>,
    },

    #[error("fetch task failed to complete: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("cache file operation failed: {0}")]
    Io(#[from] std::io::Error),
}
