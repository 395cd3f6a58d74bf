// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV output for issue durations and releases.
//!
//! File names are derived from the report label:
//! `jira_issues_<label>.csv` and `jira_releases_<label>.csv`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use dw_core::{Release, StatusTable};

use crate::error::Result;

/// Fixed leading columns of the issue report; status columns follow.
pub const ISSUE_COLUMNS: [&str; 3] = ["Issue Key", "Issue Type", "Story Name"];

pub const RELEASE_COLUMNS: [&str; 4] = ["Release", "Release Date", "Duration (days)", "Tickets"];

pub fn issues_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("jira_issues_{}.csv", label))
}

pub fn releases_path(dir: &Path, label: &str) -> PathBuf {
    dir.join(format!("jira_releases_{}.csv", label))
}

/// Formats a day count, keeping a decimal point on whole numbers.
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{:.1}", days)
    } else {
        days.to_string()
    }
}

/// Writes one row per issue. Statuses an issue never sat in are left empty.
pub fn write_issue_csv<W: Write>(writer: W, table: &StatusTable) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let header = ISSUE_COLUMNS
        .iter()
        .copied()
        .chain(table.columns().iter().map(String::as_str));
    csv.write_record(header)?;

    for row in table.rows() {
        let mut record = vec![
            row.key.clone(),
            row.issue_type.to_string(),
            row.summary.clone(),
        ];
        record.extend(
            table
                .columns()
                .iter()
                .map(|column| row.value(column).map(format_days).unwrap_or_default()),
        );
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes one row per release with its tickets joined by `", "`.
pub fn write_release_csv<W: Write>(writer: W, releases: &[Release]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(RELEASE_COLUMNS)?;

    for release in releases {
        csv.write_record([
            release.name.clone(),
            release.release_date.to_string(),
            release
                .duration_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
            release.tickets_joined(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Creates both CSV files under `dir` and returns their paths.
pub fn write_reports(
    dir: &Path,
    label: &str,
    table: &StatusTable,
    releases: &[Release],
) -> Result<(PathBuf, PathBuf)> {
    let issues = issues_path(dir, label);
    write_issue_csv(File::create(&issues)?, table)?;
    tracing::info!("wrote {} issue rows to {}", table.rows().len(), issues.display());

    let releases_file = releases_path(dir, label);
    write_release_csv(File::create(&releases_file)?, releases)?;
    tracing::info!("wrote {} releases to {}", releases.len(), releases_file.display());

    Ok((issues, releases_file))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
