// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status normalization: merging workflow aliases and dropping
//! administrative statuses before durations are reported.

use std::collections::{BTreeMap, BTreeSet};

use crate::duration::StatusDurations;
use crate::error::{Error, Result};

/// Built-in aliases, raw label to canonical label.
pub const DEFAULT_MERGES: &[(&str, &str)] = &[
    ("In QA", "QA"),
    ("Doing", "In progress"),
    ("In Progress / Development", "In progress"),
    ("In Progress/Development", "In progress"),
    ("Passed", "Signed Off/Ready for Release"),
];

/// Built-in statuses whose time is discarded after normalization.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "Ready for Development",
    "Product Backlog",
    "Ready to Refine",
    "Triage",
    "Closed",
    "Matters Raised",
    "Done",
    "Backlog",
];

/// Maps raw status labels to canonical ones and filters excluded statuses.
///
/// Canonical labels are fixed points: a merge target is never itself a merge
/// source, so normalizing twice gives the same label as normalizing once.
#[derive(Debug, Clone)]
pub struct StatusNormalizer {
    merges: BTreeMap<String, String>,
    excluded: BTreeSet<String>,
}

impl Default for StatusNormalizer {
    fn default() -> Self {
        StatusNormalizer {
            merges: DEFAULT_MERGES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StatusNormalizer {
    /// Adds (or replaces) an alias.
    ///
    /// Fails if the alias would form a chain with an existing one, in either
    /// direction.
    pub fn with_merge(mut self, from: &str, to: &str) -> Result<Self> {
        if from == to {
            return Ok(self);
        }
        if self.merges.contains_key(to) {
            return Err(Error::MergeChain {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if let Some((source, _)) = self.merges.iter().find(|(_, target)| *target == from) {
            return Err(Error::MergeChain {
                from: source.clone(),
                to: from.to_string(),
            });
        }
        self.merges.insert(from.to_string(), to.to_string());
        Ok(self)
    }

    /// Adds a status to the exclusion set.
    pub fn with_excluded(mut self, status: &str) -> Self {
        self.excluded.insert(status.to_string());
        self
    }

    /// Returns the canonical label for `raw`, or `raw` itself when unmapped.
    pub fn canonical<'a>(&'a self, raw: &'a str) -> &'a str {
        self.merges.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// Returns true if time in this (canonical) status is discarded.
    pub fn is_excluded(&self, status: &str) -> bool {
        self.excluded.contains(status)
    }

    /// Merges aliased statuses, summing their time, and drops excluded ones.
    pub fn normalize(&self, durations: &StatusDurations) -> StatusDurations {
        durations
            .iter()
            .map(|(status, days)| (self.canonical(status), days))
            .filter(|(status, _)| !self.is_excluded(status))
            .collect()
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
