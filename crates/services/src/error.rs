//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `CountrySource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("countries request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("countries response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted while loading the quiz dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
}
