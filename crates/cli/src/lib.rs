// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dwellrs - time-in-status reporting for Jira projects.
//!
//! This crate provides everything behind the `dwell` binary except the
//! domain logic, which lives in `dw-core`.
//!
//! # Main Components
//!
//! - [`Cli`] - command-line arguments
//! - [`Config`] - optional status merge/exclude configuration
//! - [`jira`] - the [`Tracker`](jira::Tracker) seam and its HTTP client
//! - [`pipeline`] - fetch, reconstruct, normalize and write a report
//! - [`report`] and [`chart`] - CSV and SVG output
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = dwellrs::Cli::parse();
//! dwellrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
pub mod help;
pub mod timings;
mod validate;

pub mod chart;
pub mod config;
pub mod env;
pub mod error;
pub mod jira;
pub mod pipeline;
pub mod report;

pub use cli::{Cli, Credentials, OutputArgs};
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{Outcome, ReportFiles, ReportRequest};

use dw_core::ReportWindow;

use crate::jira::JiraClient;
use crate::timings::PhaseClock;

/// Validates parsed arguments into a [`ReportRequest`].
pub fn prepare(cli: &Cli) -> Result<ReportRequest> {
    validate::validate_project_key(&cli.project_key)?;
    validate::validate_label(&cli.label)?;
    validate::validate_required("Username", &cli.credentials.username)?;
    validate::validate_required("Hostname", &cli.credentials.hostname)?;
    let window = ReportWindow::parse(&cli.start_date, &cli.end_date)?;

    Ok(ReportRequest {
        project: cli.project_key.clone(),
        window,
        label: cli.label.clone(),
        output_dir: cli.output.output_dir.clone(),
        charts: !cli.output.no_charts,
    })
}

/// Runs one report end to end.
pub fn run(cli: Cli) -> Result<()> {
    let request = prepare(&cli)?;
    let normalizer = Config::load(cli.config.as_deref())?.normalizer()?;
    let client = JiraClient::new(
        &cli.credentials.hostname,
        &cli.credentials.username,
        &cli.credentials.password,
    )?;
    tracing::info!(
        "reporting on {} from {}",
        request.project,
        client.base_url()
    );

    let mut clock = PhaseClock::from_env();
    let outcome = pipeline::run_report(&client, &request, &normalizer, &mut clock);
    clock.report();
    tracing::debug!("run finished: {:?}", outcome);
    outcome.map(|_| ())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
