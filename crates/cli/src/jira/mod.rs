// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker access.
//!
//! The [`Tracker`] trait is the seam between the report pipeline and the
//! tracker's REST API. [`JiraClient`] talks to a real instance; tests plug
//! in canned trackers instead.
//!
//! Every call returns a [`FetchResult`]. Failures are categorized so the
//! caller can decide what to do with them; the pipeline reports the failure
//! and carries on as if the call had returned nothing.

mod client;
mod payload;

pub use client::{base_url, JiraClient};
pub use payload::{IssueFields, IssueRecord, NamedField};

use dw_core::{ChangeEvent, ReportWindow, Version};

/// Work item types a report covers.
pub const REPORTED_TYPES: &[&str] = &["Story", "Bug", "Task"];

/// Statuses that mark an issue as finished.
pub const RESOLVED_STATUSES: &[&str] = &["Closed", "Done"];

/// Why a tracker call produced no data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never got a response (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The tracker answered with a non-success status code.
    #[error("tracker returned status {status}")]
    Status { status: u16 },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status code, when the tracker answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for tracker calls.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Read-only view of an issue tracker.
pub trait Tracker {
    /// Resolved stories, bugs and tasks of `project` within `window`.
    fn search_issues(&self, project: &str, window: &ReportWindow) -> FetchResult<Vec<IssueRecord>>;

    /// Change history of one issue, in the order the tracker lists it.
    fn change_history(&self, issue_key: &str) -> FetchResult<Vec<ChangeEvent>>;

    /// All versions (releases) defined for `project`.
    fn project_versions(&self, project: &str) -> FetchResult<Vec<Version>>;

    /// Keys of the issues whose fix version is `version_id`.
    fn fix_version_keys(&self, project: &str, version_id: &str) -> FetchResult<Vec<String>>;
}

/// Search query for issues resolved inside the report window.
pub fn resolved_issues_jql(project: &str, window: &ReportWindow) -> String {
    format!(
        "project={} AND status in ({}) and type in ({}) and resolutiondate >= '{}' AND resolutiondate <= '{}'",
        project,
        RESOLVED_STATUSES.join(", "),
        REPORTED_TYPES.join(", "),
        window.start.format(dw_core::release::DATE_FORMAT),
        window.end.format(dw_core::release::DATE_FORMAT),
    )
}

/// Search query for the issues assigned to one fix version.
pub fn fix_version_jql(project: &str, version_id: &str) -> String {
    format!("project={} AND fixVersion={}", project, version_id)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
