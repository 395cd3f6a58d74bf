// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking REST client for Jira's v2 API.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use dw_core::{ChangeEvent, ReportWindow, Version};

use super::payload::{IssueRecord, IssueWithChangelog, KeyRecord, SearchResponse};
use super::{fix_version_jql, resolved_issues_jql, FetchError, FetchResult, Tracker};
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("dwell/", env!("CARGO_PKG_VERSION"));

/// Turns a hostname argument into a base URL.
///
/// Bare hostnames get `https://`; values that already carry a scheme are
/// used as given, minus any trailing slash.
pub fn base_url(hostname: &str) -> String {
    let hostname = hostname.trim().trim_end_matches('/');
    if hostname.starts_with("http://") || hostname.starts_with("https://") {
        hostname.to_string()
    } else {
        format!("https://{}", hostname)
    }
}

/// Jira client authenticating every request with basic credentials.
pub struct JiraClient {
    base_url: String,
    username: String,
    password: String,
    http: Client,
}

impl JiraClient {
    pub fn new(hostname: &str, username: &str, password: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(JiraClient {
            base_url: base_url(hostname),
            username: username.to_string(),
            password: password.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Tracker for JiraClient {
    fn search_issues(&self, project: &str, window: &ReportWindow) -> FetchResult<Vec<IssueRecord>> {
        let jql = resolved_issues_jql(project, window);
        let response: SearchResponse<IssueRecord> =
            self.get_json("/rest/api/2/search", &[("jql", &jql)])?;
        Ok(response.issues)
    }

    fn change_history(&self, issue_key: &str) -> FetchResult<Vec<ChangeEvent>> {
        let path = format!("/rest/api/2/issue/{}", issue_key);
        let issue: IssueWithChangelog = self.get_json(&path, &[("expand", "changelog")])?;
        Ok(issue.changelog.histories)
    }

    fn project_versions(&self, project: &str) -> FetchResult<Vec<Version>> {
        let path = format!("/rest/api/2/project/{}/versions", project);
        self.get_json(&path, &[])
    }

    fn fix_version_keys(&self, project: &str, version_id: &str) -> FetchResult<Vec<String>> {
        let jql = fix_version_jql(project, version_id);
        let response: SearchResponse<KeyRecord> =
            self.get_json("/rest/api/2/search", &[("jql", &jql)])?;
        Ok(response.issues.into_iter().map(|issue| issue.key).collect())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
