// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;
use std::path::Path;
use yare::parameterized;

const CREDENTIALS: [&str; 6] = [
    "--username",
    "alice",
    "--password",
    "secret",
    "--hostname",
    "jira.example.com",
];

fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
    let mut argv = vec!["dwell", "PROJ", "2024-01-01", "2024-03-31", "q1"];
    argv.extend_from_slice(&CREDENTIALS);
    argv.extend_from_slice(extra);
    Cli::try_parse_from(argv)
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_positionals_and_credentials() {
    let cli = parse(&[]).unwrap();
    assert_eq!(cli.project_key, "PROJ");
    assert_eq!(cli.start_date, "2024-01-01");
    assert_eq!(cli.end_date, "2024-03-31");
    assert_eq!(cli.label, "q1");
    assert_eq!(cli.credentials.username, "alice");
    assert_eq!(cli.credentials.password, "secret");
    assert_eq!(cli.credentials.hostname, "jira.example.com");
}

#[test]
fn output_defaults_to_current_directory_with_charts() {
    let cli = parse(&[]).unwrap();
    assert_eq!(cli.output.output_dir, Path::new("."));
    assert!(!cli.output.no_charts);
    assert!(cli.config.is_none());
}

#[test]
fn optional_flags_are_parsed() {
    let cli = parse(&["--output-dir", "out", "--no-charts", "--config", "s.toml"]).unwrap();
    assert_eq!(cli.output.output_dir, Path::new("out"));
    assert!(cli.output.no_charts);
    assert_eq!(cli.config.as_deref(), Some(Path::new("s.toml")));
}

#[parameterized(
    username = { "--username" },
    password = { "--password" },
    hostname = { "--hostname" },
)]
fn credentials_are_required(flag: &str) {
    let mut argv = vec!["dwell", "PROJ", "2024-01-01", "2024-03-31", "q1"];
    for pair in CREDENTIALS.chunks(2) {
        if pair[0] != flag {
            argv.extend_from_slice(pair);
        }
    }
    let err = Cli::try_parse_from(argv).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn missing_label_is_rejected() {
    let mut argv = vec!["dwell", "PROJ", "2024-01-01", "2024-03-31"];
    argv.extend_from_slice(&CREDENTIALS);
    assert!(Cli::try_parse_from(argv).is_err());
}

#[parameterized(
    blank_project = { "  ", "q1" },
    blank_label = { "PROJ", " " },
)]
fn blank_positionals_are_rejected(project: &str, label: &str) {
    let mut argv = vec!["dwell", project, "2024-01-01", "2024-03-31", label];
    argv.extend_from_slice(&CREDENTIALS);
    assert!(Cli::try_parse_from(argv).is_err());
}
