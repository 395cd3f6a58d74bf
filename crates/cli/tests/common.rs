// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use dw_core::ReportWindow;
use dwellrs::jira::{fix_version_jql, resolved_issues_jql};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const PROJECT: &str = "PROJ";
pub const START: &str = "2024-01-01";
pub const END: &str = "2024-01-31";
pub const LABEL: &str = "jan";

pub fn dwell() -> Command {
    let mut cmd = cargo_bin_cmd!("dwell");
    cmd.env_remove("DWELL_CONFIG")
        .env_remove("DWELL_TIMINGS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A mock Jira server. Requests without a matching mock get a 501.
pub struct FakeJira {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl FakeJira {
    pub fn new() -> Self {
        FakeJira {
            server: Server::new(),
            mocks: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    fn json(mut self, path: &str, query: Matcher, status: usize, body: &str) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .match_query(query)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create();
        self.mocks.push(mock);
        self
    }

    pub fn search(self, status: usize, body: &str) -> Self {
        let window = ReportWindow::parse(START, END).unwrap();
        let jql = resolved_issues_jql(PROJECT, &window);
        self.json(
            "/rest/api/2/search",
            Matcher::UrlEncoded("jql".into(), jql),
            status,
            body,
        )
    }

    pub fn history(self, key: &str, body: &str) -> Self {
        let path = format!("/rest/api/2/issue/{}", key);
        self.json(
            &path,
            Matcher::UrlEncoded("expand".into(), "changelog".into()),
            200,
            body,
        )
    }

    pub fn versions(self, body: &str) -> Self {
        let path = format!("/rest/api/2/project/{}/versions", PROJECT);
        self.json(&path, Matcher::Any, 200, body)
    }

    pub fn fix_version(self, version_id: &str, body: &str) -> Self {
        let jql = fix_version_jql(PROJECT, version_id);
        self.json(
            "/rest/api/2/search",
            Matcher::UrlEncoded("jql".into(), jql),
            200,
            body,
        )
    }

    /// One resolved story with five business days in "Doing" and one in
    /// "In QA", one bug without history, and a release in January.
    pub fn populated() -> Self {
        FakeJira::new()
            .search(200, ISSUES)
            .history("PROJ-1", STORY_HISTORY)
            .history("PROJ-2", EMPTY_HISTORY)
            .versions(VERSIONS)
            .fix_version("10", FIX_VERSION_10)
    }
}

/// `dwell PROJ 2024-01-01 2024-01-31 jan` against `jira`, writing to `out`.
///
/// The config directory points into `out` so no user config is picked up.
pub fn report(jira: &FakeJira, out: &TempDir) -> Command {
    let mut cmd = dwell();
    cmd.args([PROJECT, START, END, LABEL])
        .args(["--username", "alice", "--password", "secret"])
        .arg("--hostname")
        .arg(jira.url())
        .arg("--output-dir")
        .arg(out.path())
        .env("XDG_CONFIG_HOME", out.path().join("config"));
    cmd
}

pub fn read(out: &TempDir, name: &str) -> String {
    std::fs::read_to_string(out.path().join(name)).unwrap()
}

pub const ISSUES: &str = r#"{"issues": [
    {"key": "PROJ-1", "fields": {"issuetype": {"name": "Story"}, "summary": "Login page",
     "resolutiondate": "2024-01-11T17:00:00.000+0000"}},
    {"key": "PROJ-2", "fields": {"issuetype": {"name": "Bug"}, "summary": "Crash on save",
     "resolutiondate": "2024-01-12T10:30:00.000+0000"}}
]}"#;

pub const STORY_HISTORY: &str = r#"{"key": "PROJ-1", "changelog": {"histories": [
    {"created": "2024-01-01T09:00:00.000+0000",
     "items": [{"field": "status", "fromString": "Backlog", "toString": "Doing"}]},
    {"created": "2024-01-03T11:00:00.000+0000",
     "items": [{"field": "assignee", "fromString": null, "toString": "Alice"}]},
    {"created": "2024-01-06T09:00:00.000+0000",
     "items": [{"field": "status", "fromString": "Doing", "toString": "In QA"}]},
    {"created": "2024-01-11T09:00:00.000+0000",
     "items": [{"field": "status", "fromString": "In QA", "toString": "Done"}]}
]}}"#;

pub const EMPTY_HISTORY: &str = r#"{"key": "PROJ-2", "changelog": {"histories": []}}"#;

pub const VERSIONS: &str = r#"[
    {"id": "10", "name": "1.0", "startDate": "2024-01-01", "releaseDate": "2024-01-31", "released": true},
    {"id": "11", "name": "1.1", "startDate": "2024-02-01", "releaseDate": "2024-02-15", "released": true},
    {"id": "12", "name": "2.0", "released": false}
]"#;

pub const FIX_VERSION_10: &str = r#"{"issues": [{"key": "PROJ-1"}, {"key": "PROJ-2"}]}"#;
