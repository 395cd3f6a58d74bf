// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The report run: fetch, reconstruct, normalize, write.
//!
//! Tracker failures never abort a run. Each failed call is reported on
//! stdout (`Error: <status>`) and treated as an empty result. Missing
//! releases or issues end the run early but cleanly. Malformed timestamps
//! in tracker data are fatal.

use std::path::PathBuf;

use dw_core::{reconstruct, Issue, Release, ReportRow, ReportWindow, StatusNormalizer, StatusTable};

use crate::chart;
use crate::error::Result;
use crate::jira::{FetchError, FetchResult, Tracker};
use crate::report;
use crate::timings::PhaseClock;

/// Everything a run needs besides the tracker itself.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub project: String,
    pub window: ReportWindow,
    pub label: String,
    pub output_dir: PathBuf,
    pub charts: bool,
}

/// Files produced by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub issues_csv: PathBuf,
    pub releases_csv: PathBuf,
    pub status_chart: Option<PathBuf>,
    pub release_chart: Option<PathBuf>,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No version was released inside the window.
    NoReleases,
    /// No resolved issue matched the search.
    NoIssues,
    Written(ReportFiles),
}

/// Downgrades a failed tracker call to an empty result, reporting it.
fn or_empty<T>(result: FetchResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            report_failure(&err);
            tracing::warn!("{} unavailable, continuing without it: {}", what, err);
            Vec::new()
        }
    }
}

fn report_failure(err: &FetchError) {
    match err.status() {
        Some(status) => println!("Error: {}", status),
        None => println!("Error: {}", err),
    }
}

/// Fetches the project's versions and keeps those released inside the
/// window, each with the keys of its tickets.
pub fn collect_releases(
    tracker: &impl Tracker,
    project: &str,
    window: &ReportWindow,
) -> Vec<Release> {
    let versions = or_empty(tracker.project_versions(project), "project versions");
    versions
        .iter()
        .filter(|version| version.released_within(window))
        .filter_map(|version| {
            let tickets = or_empty(
                tracker.fix_version_keys(project, &version.id),
                "fix version tickets",
            );
            Release::from_version(version, tickets)
        })
        .collect()
}

/// Reconstructs, normalizes and tabulates the status durations of `issues`.
///
/// Every issue gets a row, even when its history could not be fetched.
pub fn build_table(
    tracker: &impl Tracker,
    issues: &[Issue],
    normalizer: &StatusNormalizer,
    clock: &mut PhaseClock,
) -> Result<StatusTable> {
    let mut table = StatusTable::new();
    for issue in issues {
        let history = clock.time("fetch::history", || {
            or_empty(tracker.change_history(&issue.key), "change history")
        });
        let durations = clock.time("reconstruct", || reconstruct(&history))?;
        tracing::debug!(
            "{}: {} events, {} statuses",
            issue.key,
            history.len(),
            durations.len()
        );
        table.push(ReportRow::new(issue, normalizer.normalize(&durations)));
    }
    Ok(table)
}

fn print_releases(releases: &[Release]) {
    for release in releases {
        println!("Release: {}", release.name);
        println!("Release Date: {}", release.release_date);
        println!(
            "Duration (days): {}",
            release
                .duration_days
                .map(|days| days.to_string())
                .unwrap_or_default()
        );
        println!("Tickets: {}", release.tickets_joined());
        println!();
    }
}

/// Runs the whole report against `tracker`.
pub fn run_report(
    tracker: &impl Tracker,
    request: &ReportRequest,
    normalizer: &StatusNormalizer,
    clock: &mut PhaseClock,
) -> Result<Outcome> {
    let records = clock.time("fetch::issues", || {
        or_empty(
            tracker.search_issues(&request.project, &request.window),
            "issue search",
        )
    });
    let releases = clock.time("fetch::releases", || {
        collect_releases(tracker, &request.project, &request.window)
    });

    if releases.is_empty() {
        println!("No releases and tickets found.");
        return Ok(Outcome::NoReleases);
    }
    print_releases(&releases);

    if records.is_empty() {
        println!("No issues found.");
        return Ok(Outcome::NoIssues);
    }

    let issues = records
        .into_iter()
        .map(|record| record.into_issue())
        .collect::<dw_core::Result<Vec<_>>>()?;
    tracing::info!(
        "{} issues and {} releases in {}..{}",
        issues.len(),
        releases.len(),
        request.window.start,
        request.window.end
    );

    let table = build_table(tracker, &issues, normalizer, clock)?;

    std::fs::create_dir_all(&request.output_dir)?;
    let (issues_csv, releases_csv) = clock.time("write::csv", || {
        report::write_reports(&request.output_dir, &request.label, &table, &releases)
    })?;
    println!("Wrote {}", issues_csv.display());
    println!("Wrote {}", releases_csv.display());

    let (status_chart, release_chart) = if request.charts {
        let (status, durations) = clock.time("write::charts", || {
            chart::render_charts(&request.output_dir, &request.label, &table, &releases)
        })?;
        println!("Wrote {}", status.display());
        println!("Wrote {}", durations.display());
        (Some(status), Some(durations))
    } else {
        (None, None)
    };

    Ok(Outcome::Written(ReportFiles {
        issues_csv,
        releases_csv,
        status_chart,
        release_chart,
    }))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
