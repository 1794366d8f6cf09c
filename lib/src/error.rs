extern crate thiserror;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("{0}")]
    Schedule(#[from] ScheduleError),
}

/// Failure to derive searchable fields from a record.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("Missing Field: {0}")]
    Missing(String),

    #[error("Malformed Record: {0}")]
    Malformed(String),
}

/// Timer facility errors.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Runtime Error: {0}")]
    Runtime(String),
}
