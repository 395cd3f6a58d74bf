// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flattened argument groups for [`Cli`](super::Cli).

use std::path::PathBuf;

use clap::Args;

/// Jira connection settings.
#[derive(Args, Clone, Debug)]
pub struct Credentials {
    /// Jira user name
    #[arg(long, value_name = "user")]
    pub username: String,

    /// Jira password or API token
    #[arg(long, value_name = "token")]
    pub password: String,

    /// Jira host, e.g. example.atlassian.net (https:// is assumed)
    #[arg(long, value_name = "host")]
    pub hostname: String,
}

/// Where and what to write.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Directory receiving the reports
    #[arg(long, value_name = "dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip rendering the SVG charts
    #[arg(long)]
    pub no_charts: bool,
}
