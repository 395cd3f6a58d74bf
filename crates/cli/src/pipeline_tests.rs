// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::jira::{IssueFields, IssueRecord, NamedField};
use dw_core::release::parse_date;
use dw_core::{ChangeEvent, ChangeItem, IssueType, Version};
use similar_asserts::assert_eq;
use std::collections::HashMap;
use tempfile::TempDir;

#[derive(Default)]
struct FakeTracker {
    issues: Vec<IssueRecord>,
    histories: HashMap<String, Vec<ChangeEvent>>,
    versions: Vec<Version>,
    tickets: HashMap<String, Vec<String>>,
    issues_error: Option<FetchError>,
    history_error: Option<FetchError>,
}

impl Tracker for FakeTracker {
    fn search_issues(
        &self,
        _project: &str,
        _window: &ReportWindow,
    ) -> FetchResult<Vec<IssueRecord>> {
        match &self.issues_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.issues.clone()),
        }
    }

    fn change_history(&self, issue_key: &str) -> FetchResult<Vec<ChangeEvent>> {
        match &self.history_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.histories.get(issue_key).cloned().unwrap_or_default()),
        }
    }

    fn project_versions(&self, _project: &str) -> FetchResult<Vec<Version>> {
        Ok(self.versions.clone())
    }

    fn fix_version_keys(&self, _project: &str, version_id: &str) -> FetchResult<Vec<String>> {
        Ok(self.tickets.get(version_id).cloned().unwrap_or_default())
    }
}

fn record(key: &str, issue_type: &str, summary: &str) -> IssueRecord {
    IssueRecord {
        key: key.to_string(),
        fields: IssueFields {
            issuetype: NamedField {
                name: issue_type.to_string(),
            },
            summary: summary.to_string(),
            resolutiondate: Some("2024-01-11T17:00:00.000+0000".to_string()),
        },
    }
}

fn transition(created: &str, from: &str, to: &str) -> ChangeEvent {
    ChangeEvent {
        created: created.to_string(),
        items: vec![ChangeItem {
            field: "status".to_string(),
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }],
    }
}

fn version(id: &str, name: &str, start: Option<&str>, release: Option<&str>) -> Version {
    Version {
        id: id.to_string(),
        name: name.to_string(),
        start_date: start.map(|s| parse_date(s).unwrap()),
        release_date: release.map(|s| parse_date(s).unwrap()),
    }
}

fn window() -> ReportWindow {
    ReportWindow::parse("2024-01-01", "2024-01-31").unwrap()
}

/// 2024-01-01 is a Monday. P-1 spends Mon..Sat in "Doing", then one
/// business day in "In QA" across a weekend. P-2 has no history.
fn tracker() -> FakeTracker {
    let mut histories = HashMap::new();
    histories.insert(
        "P-1".to_string(),
        vec![
            transition("2024-01-01T09:00:00.000+0000", "Backlog", "Doing"),
            transition("2024-01-06T09:00:00.000+0000", "Doing", "In QA"),
            transition("2024-01-11T09:00:00.000+0000", "In QA", "Done"),
        ],
    );
    let mut tickets = HashMap::new();
    tickets.insert("10".to_string(), vec!["P-1".to_string(), "P-2".to_string()]);

    FakeTracker {
        issues: vec![
            record("P-1", "Story", "Login page"),
            record("P-2", "Bug", "Crash on save"),
        ],
        histories,
        versions: vec![
            version("10", "1.0", Some("2024-01-01"), Some("2024-01-31")),
            version("11", "1.1", Some("2024-02-01"), Some("2024-02-15")),
            version("12", "unreleased", Some("2024-01-01"), None),
            version("13", "hotfix", None, Some("2024-01-05")),
        ],
        tickets,
        ..Default::default()
    }
}

fn request(dir: &TempDir, charts: bool) -> ReportRequest {
    ReportRequest {
        project: "P".to_string(),
        window: window(),
        label: "jan".to_string(),
        output_dir: dir.path().to_path_buf(),
        charts,
    }
}

#[test]
fn collect_releases_keeps_versions_released_in_window() {
    let releases = collect_releases(&tracker(), "P", &window());
    let names: Vec<&str> = releases.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["1.0", "hotfix"]);

    assert_eq!(releases[0].duration_days, Some(30));
    assert_eq!(releases[0].tickets_joined(), "P-1, P-2");
    assert_eq!(releases[1].duration_days, None);
    assert!(releases[1].tickets.is_empty());
}

#[test]
fn build_table_reconstructs_and_normalizes_each_issue() {
    let issues = vec![
        record("P-1", "Story", "Login page").into_issue().unwrap(),
        record("P-2", "Bug", "Crash on save").into_issue().unwrap(),
    ];
    let table = build_table(
        &tracker(),
        &issues,
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();

    assert_eq!(table.columns(), ["In progress", "QA"]);
    let rows = table.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value("In progress"), Some(5.0));
    assert_eq!(rows[0].value("QA"), Some(1.0));
    assert_eq!(rows[1].key, "P-2");
    assert_eq!(rows[1].issue_type, IssueType::Bug);
    assert!(rows[1].durations.is_empty());
}

#[test]
fn build_table_keeps_rows_when_history_is_unavailable() {
    let tracker = FakeTracker {
        history_error: Some(FetchError::Status { status: 404 }),
        ..tracker()
    };
    let issues = vec![record("P-1", "Story", "Login page").into_issue().unwrap()];
    let table = build_table(
        &tracker,
        &issues,
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();

    assert_eq!(table.rows().len(), 1);
    assert!(table.columns().is_empty());
}

#[test]
fn build_table_fails_on_malformed_timestamp() {
    let mut tracker = tracker();
    tracker.histories.insert(
        "P-1".to_string(),
        vec![transition("yesterday", "Backlog", "Doing")],
    );
    let issues = vec![record("P-1", "Story", "Login page").into_issue().unwrap()];
    let err = build_table(
        &tracker,
        &issues,
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidTimestamp { ref value, .. } if value == "yesterday"));
}

#[test]
fn run_report_writes_csv_files() {
    let dir = TempDir::new().unwrap();
    let outcome = run_report(
        &tracker(),
        &request(&dir, false),
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();

    let expected = ReportFiles {
        issues_csv: dir.path().join("jira_issues_jan.csv"),
        releases_csv: dir.path().join("jira_releases_jan.csv"),
        status_chart: None,
        release_chart: None,
    };
    assert_eq!(outcome, Outcome::Written(expected));

    let issues = std::fs::read_to_string(dir.path().join("jira_issues_jan.csv")).unwrap();
    assert_eq!(
        issues,
        "Issue Key,Issue Type,Story Name,In progress,QA\n\
         P-1,Story,Login page,5.0,1.0\n\
         P-2,Bug,Crash on save,,\n"
    );

    let releases = std::fs::read_to_string(dir.path().join("jira_releases_jan.csv")).unwrap();
    assert_eq!(
        releases,
        "Release,Release Date,Duration (days),Tickets\n\
         1.0,2024-01-31,30,\"P-1, P-2\"\n\
         hotfix,2024-01-05,,\n"
    );
    assert!(!dir.path().join("jira_status_jan.svg").exists());
}

#[test]
fn run_report_renders_charts_when_enabled() {
    let dir = TempDir::new().unwrap();
    let outcome = run_report(
        &tracker(),
        &request(&dir, true),
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();

    let Outcome::Written(files) = outcome else {
        unreachable!("report should be written");
    };
    assert_eq!(files.status_chart, Some(dir.path().join("jira_status_jan.svg")));
    assert_eq!(
        files.release_chart,
        Some(dir.path().join("jira_release_durations_jan.svg"))
    );
    assert!(dir.path().join("jira_status_jan.svg").is_file());
    assert!(dir.path().join("jira_release_durations_jan.svg").is_file());
}

#[test]
fn run_report_creates_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let mut request = request(&dir, false);
    request.output_dir = dir.path().join("nested").join("out");
    run_report(
        &tracker(),
        &request,
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();
    assert!(request.output_dir.join("jira_issues_jan.csv").is_file());
}

#[test]
fn run_report_stops_without_releases() {
    let dir = TempDir::new().unwrap();
    let tracker = FakeTracker {
        versions: Vec::new(),
        ..tracker()
    };
    let outcome = run_report(
        &tracker,
        &request(&dir, true),
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();

    assert_eq!(outcome, Outcome::NoReleases);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn run_report_treats_failed_search_as_no_issues() {
    let dir = TempDir::new().unwrap();
    let tracker = FakeTracker {
        issues_error: Some(FetchError::Status { status: 401 }),
        ..tracker()
    };
    let outcome = run_report(
        &tracker,
        &request(&dir, true),
        &StatusNormalizer::default(),
        &mut PhaseClock::new(false),
    )
    .unwrap();

    assert_eq!(outcome, Outcome::NoIssues);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn run_report_records_phase_timings() {
    let dir = TempDir::new().unwrap();
    let mut clock = PhaseClock::new(true);
    run_report(
        &tracker(),
        &request(&dir, false),
        &StatusNormalizer::default(),
        &mut clock,
    )
    .unwrap();

    let phases: Vec<&str> = clock.phases().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        phases,
        vec![
            "fetch::issues",
            "fetch::releases",
            "fetch::history",
            "reconstruct",
            "write::csv"
        ]
    );
}

#[test]
fn or_empty_downgrades_failures() {
    let failed: FetchResult<Vec<u8>> = Err(FetchError::Transport("refused".to_string()));
    assert!(or_empty(failed, "test").is_empty());
    assert_eq!(or_empty(Ok(vec![1, 2]), "test"), vec![1, 2]);
}
