// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors that end a dwell run.
///
/// Tracker request failures are not listed here: they are reported as
/// [`FetchError`](crate::jira::FetchError) and downgraded to empty results.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid project key '{0}'\n  hint: project keys start with a letter and contain only letters, digits and underscores")]
    InvalidProjectKey(String),

    #[error("invalid date '{0}'\n  hint: dates use the form YYYY-MM-DD")]
    InvalidDate(String),

    #[error("start date {start} is after end date {end}")]
    InvertedWindow { start: String, end: String },

    #[error("invalid timestamp '{value}' in tracker data: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid report label '{0}'\n  hint: the label becomes part of file names, so it cannot contain path separators")]
    InvalidLabel(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("cannot create http client: {0}")]
    HttpClient(String),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized Result type for dwell operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<dw_core::Error> for Error {
    fn from(e: dw_core::Error) -> Self {
        match e {
            dw_core::Error::InvalidTimestamp { value, source } => Error::InvalidTimestamp {
                value,
                reason: source.to_string(),
            },
            dw_core::Error::InvalidDate(s) => Error::InvalidDate(s),
            dw_core::Error::InvertedWindow { start, end } => Error::InvertedWindow { start, end },
            e @ dw_core::Error::MergeChain { .. } => Error::Config(e.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
