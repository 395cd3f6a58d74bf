// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire shapes of the tracker's REST responses.
//!
//! Only the fields the report needs are modeled; everything else in the
//! payload is ignored.

use serde::Deserialize;

use dw_core::{parse_timestamp, ChangeEvent, Issue, IssueType};

/// `GET /rest/api/2/search` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse<T> {
    #[serde(default = "Vec::new")]
    pub issues: Vec<T>,
}

/// An issue as returned by a search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueRecord {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueFields {
    pub issuetype: NamedField,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub resolutiondate: Option<String>,
}

/// Any `{ "name": ... }` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedField {
    pub name: String,
}

/// Search hit when only the key is needed.
#[derive(Debug, Deserialize)]
pub(crate) struct KeyRecord {
    pub key: String,
}

/// `GET /rest/api/2/issue/{key}?expand=changelog` response.
#[derive(Debug, Deserialize)]
pub(crate) struct IssueWithChangelog {
    #[serde(default)]
    pub changelog: Changelog,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Changelog {
    #[serde(default)]
    pub histories: Vec<ChangeEvent>,
}

impl IssueRecord {
    /// Converts the wire record into a domain issue.
    ///
    /// Fails if the resolution timestamp is present but malformed.
    pub fn into_issue(self) -> dw_core::Result<Issue> {
        let resolved_at = self
            .fields
            .resolutiondate
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        Ok(Issue {
            key: self.key,
            issue_type: IssueType::from(self.fields.issuetype.name),
            summary: self.fields.summary,
            resolved_at,
        })
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
