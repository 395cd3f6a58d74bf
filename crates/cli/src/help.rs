// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text for the `dwell` command.

use crate::colors;
use clap::builder::styling::Styles;

/// clap styles matching the [`colors`] palette, or plain when colors are off.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Examples and environment notes shown after the options.
pub fn after_help() -> String {
    colors::examples(
        "\
Examples:
  dwell PROJ 2024-01-01 2024-03-31 q1 --username <user> --password <token> --hostname <host>
      Write q1 reports for PROJ into the current directory
  dwell PROJ 2024-01-01 2024-03-31 q1 --output-dir <dir> --no-charts ...
      Write only the CSV files into <dir>

Environment:
  DWELL_CONFIG    Status config file used when --config is absent
  DWELL_TIMINGS   Print phase timings to stderr
  RUST_LOG        Log filter, defaults to warn",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
