use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single location produced no record.
///
/// Every variant is contained within the fetch loop: the only consequence of
/// any of these is that the location is absent from the output.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed: DNS, connect, timeout, protocol error.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-200 status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(StatusCode),

    /// The provider returned a well-formed error payload.
    #[error("provider error: {0}")]
    Provider(String),

    /// The body was not the JSON shape we expect.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Failure to persist the collected records. Fatal to the run: once fetching
/// has finished, discarding the data silently would be worse than aborting.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write CSV to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush CSV to {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
