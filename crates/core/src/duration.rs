// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconstruction of per-status durations from an issue's change history.
//!
//! The history is walked in the order the tracker returned it. Each status
//! transition closes the interval that began at the previous transition and
//! credits it to the status the issue was sitting in during that interval.
//! Weekends are discounted with a fixed credit per weekend day scanned, so
//! the result is an approximation of business days rather than an exact
//! calendar count.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Weekday};

use crate::error::Result;
use crate::issue::ChangeEvent;

/// Days subtracted for every Saturday or Sunday encountered while scanning
/// an interval one day at a time.
pub const WEEKEND_DAY_CREDIT: f64 = 2.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Accumulated business days per status name, in first-seen order.
///
/// All values are non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusDurations {
    entries: Vec<(String, f64)>,
}

impl StatusDurations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `days` to the running total for `status`, creating it if needed.
    /// Negative contributions are clamped to zero.
    pub fn add(&mut self, status: &str, days: f64) {
        let days = days.max(0.0);
        match self.entries.iter_mut().find(|(name, _)| name == status) {
            Some((_, total)) => *total += days,
            None => self.entries.push((status.to_string(), days)),
        }
    }

    pub fn get(&self, status: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == status)
            .map(|(_, days)| *days)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, days)| (name.as_str(), *days))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for StatusDurations {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut durations = StatusDurations::new();
        for (status, days) in iter {
            durations.add(status.as_ref(), days);
        }
        durations
    }
}

/// Raw elapsed time between two instants in fractional days.
///
/// Negative when `to` precedes `from`.
pub fn elapsed_days(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Weekend exclusion for the interval `[from, to)`.
///
/// Steps from `from` one day at a time while still before `to`, adding
/// [`WEEKEND_DAY_CREDIT`] for each step that lands on a Saturday or Sunday.
/// The day of week is read in `from`'s own UTC offset.
pub fn weekend_credit(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> f64 {
    let mut day = from;
    let mut credit = 0.0;
    while day < to {
        if is_weekend(&day) {
            credit += WEEKEND_DAY_CREDIT;
        }
        day += Duration::days(1);
    }
    credit
}

fn is_weekend(ts: &DateTime<FixedOffset>) -> bool {
    matches!(ts.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Point where the current status interval began.
struct Cursor {
    at: DateTime<FixedOffset>,
    status: Option<String>,
}

/// Per-issue reconstruction state, threaded through the event fold.
#[derive(Default)]
struct Accumulator {
    cursor: Option<Cursor>,
    durations: StatusDurations,
}

impl Accumulator {
    fn apply(mut self, event: &ChangeEvent) -> Result<Self> {
        let created = event.created_at()?;

        for item in event.status_items() {
            if let Some(cursor) = self.cursor.take() {
                if let Some(status) = cursor.status {
                    let raw = elapsed_days(cursor.at, created);
                    let credit = weekend_credit(cursor.at, created);
                    self.durations.add(&status, raw - credit);
                }
            }
            self.cursor = Some(Cursor {
                at: created,
                status: item.to.clone(),
            });
        }

        Ok(self)
    }

    fn finish(self) -> StatusDurations {
        self.durations
    }
}

/// Converts an ordered change history into business days per status.
///
/// The first status transition only opens an interval. Every later one
/// credits `max(0, elapsed - weekend_credit)` to the status that was active
/// before it. Events without a status item are skipped, but their
/// timestamps must still parse; a malformed timestamp aborts the whole
/// reconstruction.
pub fn reconstruct(events: &[ChangeEvent]) -> Result<StatusDurations> {
    events
        .iter()
        .try_fold(Accumulator::default(), Accumulator::apply)
        .map(Accumulator::finish)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
