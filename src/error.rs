//! Error types for the rate fetcher.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that end the whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("fetch task failed to run: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Why a single day could not be fetched.
///
/// Failures at this level degrade the day to "no data": the day is dropped
/// from the report and the other days are unaffected.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("bad response body from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

/// Result type alias for whole-run failures.
pub type Result<T> = std::result::Result<T, Error>;
