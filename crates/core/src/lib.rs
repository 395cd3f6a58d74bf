// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dw-core: domain library for the dwell time-in-status reporter
//!
//! This crate holds everything that does not touch the network or the
//! filesystem: the tracker data model, reconstruction of per-status
//! durations from a change history, status normalization, release windowing
//! and the per-issue status table shared by the CSV and chart writers.

pub mod duration;
pub mod error;
pub mod issue;
pub mod normalize;
pub mod release;
pub mod table;

pub use duration::{reconstruct, weekend_credit, StatusDurations};
pub use error::{Error, Result};
pub use issue::{parse_timestamp, ChangeEvent, ChangeItem, Issue, IssueType};
pub use normalize::StatusNormalizer;
pub use release::{Release, ReportWindow, Version};
pub use table::{ReportRow, StatusTable};
