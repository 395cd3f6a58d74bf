// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue status table shared by the CSV and chart writers.

use crate::duration::StatusDurations;
use crate::issue::{Issue, IssueType};

/// One report line: an issue and its normalized status durations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub key: String,
    pub issue_type: IssueType,
    pub summary: String,
    pub durations: StatusDurations,
}

impl ReportRow {
    pub fn new(issue: &Issue, durations: StatusDurations) -> Self {
        ReportRow {
            key: issue.key.clone(),
            issue_type: issue.issue_type.clone(),
            summary: issue.summary.clone(),
            durations,
        }
    }

    /// Days recorded for `status`, or `None` if the issue never sat in it.
    pub fn value(&self, status: &str) -> Option<f64> {
        self.durations.get(status)
    }
}

/// Ordered report rows plus the union of their status columns.
///
/// Columns appear in the order statuses are first seen across rows.
#[derive(Debug, Clone, Default)]
pub struct StatusTable {
    columns: Vec<String>,
    rows: Vec<ReportRow>,
}

impl StatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ReportRow) {
        for (status, _) in row.durations.iter() {
            if !self.columns.iter().any(|c| c == status) {
                self.columns.push(status.to_string());
            }
        }
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of each status column across all rows, in column order.
    pub fn totals(&self) -> Vec<(String, f64)> {
        self.columns
            .iter()
            .map(|column| {
                let total = self.rows.iter().filter_map(|row| row.value(column)).sum();
                (column.clone(), total)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
