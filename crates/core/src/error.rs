// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dw-core operations.

use thiserror::Error;

/// All possible errors that can occur in dw-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid timestamp '{value}': {source}\n  hint: expected a tracker timestamp like 2024-01-08T09:00:00.000+0000")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid date '{0}'\n  hint: dates use the form YYYY-MM-DD")]
    InvalidDate(String),

    #[error("start date {start} is after end date {end}")]
    InvertedWindow { start: String, end: String },

    #[error("status '{from}' merges into '{to}', which is itself merged into another status\n  hint: point '{from}' at the final status name instead")]
    MergeChain { from: String, to: String },
}

/// A specialized Result type for dw-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
