//! Error types for the Sleeper fantasy league aggregator

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sleeper API unavailable: {url} returned {status}")]
    RemoteUnavailable { url: String, status: u16 },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Unresolved reference: {reference}")]
    UnresolvedReference { reference: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Invalid league ID: {value:?}")]
    InvalidLeagueId { value: String },
}

impl SleeperError {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        SleeperError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
