//! Error type for the watchlist core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Market API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WatchlistError>;
