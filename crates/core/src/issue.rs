// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker data model: issues and their change history.
//!
//! Change events deserialize straight from the tracker's changelog payload
//! (`created`, `items[].field`, `items[].fromString`, `items[].toString`).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Timestamp layout used by the tracker, e.g. `2024-01-08T09:00:00.000+0000`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Name of the change-item field that carries workflow status transitions.
pub const STATUS_FIELD: &str = "status";

/// Parses a tracker timestamp, keeping the UTC offset it was written with.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| Error::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}

/// Work item type as reported by the tracker.
///
/// Reports only ask for stories, bugs and tasks, but any other type name the
/// tracker returns is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueType {
    /// User-facing feature work.
    Story,
    /// Defect or problem to fix.
    Bug,
    /// Standard unit of work.
    Task,
    /// Any other tracker type, kept as named.
    Other(String),
}

impl IssueType {
    /// Returns the name as the tracker spells it.
    pub fn as_str(&self) -> &str {
        match self {
            IssueType::Story => "Story",
            IssueType::Bug => "Bug",
            IssueType::Task => "Task",
            IssueType::Other(name) => name,
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for IssueType {
    fn from(s: &str) -> Self {
        match s {
            "Story" => IssueType::Story,
            "Bug" => IssueType::Bug,
            "Task" => IssueType::Task,
            _ => IssueType::Other(s.to_string()),
        }
    }
}

impl From<String> for IssueType {
    fn from(s: String) -> Self {
        IssueType::from(s.as_str())
    }
}

impl From<IssueType> for String {
    fn from(t: IssueType) -> Self {
        t.as_str().to_string()
    }
}

/// A resolved issue pulled from the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Tracker key, e.g. `PROJ-42`.
    pub key: String,
    pub issue_type: IssueType,
    /// One-line summary of the work.
    pub summary: String,
    /// When the issue was resolved, if the tracker reported it.
    pub resolved_at: Option<DateTime<FixedOffset>>,
}

/// One field transition inside a change event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeItem {
    pub field: String,
    #[serde(rename = "fromString", default)]
    pub from: Option<String>,
    #[serde(rename = "toString", default)]
    pub to: Option<String>,
}

impl ChangeItem {
    /// Returns true when this item records a workflow status change.
    pub fn is_status(&self) -> bool {
        self.field == STATUS_FIELD
    }
}

/// A timestamped group of field transitions applied to an issue at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeEvent {
    /// Raw tracker timestamp; parsed lazily so malformed values surface as errors.
    pub created: String,
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

impl ChangeEvent {
    /// Parses the event's creation timestamp.
    pub fn created_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.created)
    }

    /// Iterates the status transitions carried by this event.
    pub fn status_items(&self) -> impl Iterator<Item = &ChangeItem> {
        self.items.iter().filter(|item| item.is_status())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
