// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::help;
use clap::Parser;

pub use args::{Credentials, OutputArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "dwell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report how long resolved Jira issues spent in each status")]
#[command(
    long_about = "Report how long resolved Jira issues spent in each status.\n\n\
    Fetches the issues of a project resolved between two dates, rebuilds the \
    business days each one spent per status from its changelog, and writes CSV \
    reports and charts together with the releases shipped in the same window."
)]
#[command(after_help = help::after_help())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Jira project key, e.g. PROJ
    #[arg(value_name = "PROJECT_KEY", value_parser = non_empty_string)]
    pub project_key: String,

    /// First resolution date included in the report (YYYY-MM-DD)
    #[arg(value_name = "START_DATE")]
    pub start_date: String,

    /// Last resolution date included in the report (YYYY-MM-DD)
    #[arg(value_name = "END_DATE")]
    pub end_date: String,

    /// Suffix for the output file names
    #[arg(value_name = "LABEL", value_parser = non_empty_string)]
    pub label: String,

    #[command(flatten)]
    pub credentials: Credentials,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Status configuration file (TOML)
    #[arg(long, value_name = "path")]
    pub config: Option<std::path::PathBuf>,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
