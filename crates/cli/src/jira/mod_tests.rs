// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn resolved_issues_query_filters_status_type_and_dates() {
    let window = ReportWindow::parse("2024-01-01", "2024-03-31").unwrap();
    assert_eq!(
        resolved_issues_jql("PROJ", &window),
        "project=PROJ AND status in (Closed, Done) and type in (Story, Bug, Task) \
         and resolutiondate >= '2024-01-01' AND resolutiondate <= '2024-03-31'"
    );
}

#[test]
fn fix_version_query_uses_version_id() {
    assert_eq!(
        fix_version_jql("PROJ", "10042"),
        "project=PROJ AND fixVersion=10042"
    );
}

#[test]
fn fetch_error_exposes_status_only_for_responses() {
    assert_eq!(FetchError::Status { status: 401 }.status(), Some(401));
    assert_eq!(FetchError::Transport("reset".to_string()).status(), None);
    assert_eq!(FetchError::Decode("eof".to_string()).status(), None);
}

#[test]
fn fetch_error_messages() {
    assert_eq!(
        FetchError::Status { status: 503 }.to_string(),
        "tracker returned status 503"
    );
    assert_eq!(
        FetchError::Transport("timed out".to_string()).to_string(),
        "request failed: timed out"
    );
}
