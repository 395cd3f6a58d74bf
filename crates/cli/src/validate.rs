// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of command-line inputs before any request is made.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Hard-coded pattern; verified by the tests below.
static PROJECT_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Validate a tracker project key (e.g. `PROJ`, `DATA_2`).
///
/// The key is interpolated into search queries, so anything beyond
/// letters, digits and underscores is rejected.
pub fn validate_project_key(key: &str) -> Result<()> {
    if PROJECT_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(Error::InvalidProjectKey(key.to_string()))
    }
}

/// Validate the report label used to name output files.
pub fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(Error::FieldEmpty { field: "Label" });
    }
    if label.contains(['/', '\\']) || label == "." || label == ".." {
        return Err(Error::InvalidLabel(label.to_string()));
    }
    Ok(())
}

/// Validate that a required text argument is not blank.
pub fn validate_required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
