// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Releases (tracker versions) and the reporting date window.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Date layout for CLI arguments and version dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| Error::InvalidDate(value.to_string()))
}

/// Inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvertedWindow {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(ReportWindow { start, end })
    }

    /// Builds a window from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A project version as listed by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl Version {
    /// True if the version has a release date inside `window`.
    pub fn released_within(&self, window: &ReportWindow) -> bool {
        self.release_date.is_some_and(|date| window.contains(date))
    }
}

/// Calendar days from `start` to `release`, no weekend exclusion.
pub fn release_duration(start: NaiveDate, release: NaiveDate) -> i64 {
    (release - start).num_days()
}

/// A version released inside the report window, with its tickets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub release_date: NaiveDate,
    /// `None` when the version has no start date.
    pub duration_days: Option<i64>,
    pub tickets: Vec<String>,
}

impl Release {
    /// Builds a release row; returns `None` for versions without a release date.
    pub fn from_version(version: &Version, tickets: Vec<String>) -> Option<Self> {
        let release_date = version.release_date?;
        Some(Release {
            name: version.name.clone(),
            release_date,
            duration_days: version
                .start_date
                .map(|start| release_duration(start, release_date)),
            tickets,
        })
    }

    pub fn tickets_joined(&self) -> String {
        self.tickets.join(", ")
    }
}

#[cfg(test)]
#[path = "release_tests.rs"]
mod tests;
