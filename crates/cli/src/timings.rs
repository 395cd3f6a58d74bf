// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing for a report run.
//!
//! Enable with `DWELL_TIMINGS=1`. Each recorded phase is printed to stderr
//! as `[timings] phase::name XXms` when the run finishes.

use std::time::{Duration, Instant};

/// Collects wall-clock durations of named pipeline phases.
#[derive(Debug, Default)]
pub struct PhaseClock {
    enabled: bool,
    phases: Vec<(&'static str, Duration)>,
}

impl PhaseClock {
    /// Creates a clock that records only if `DWELL_TIMINGS` is set.
    pub fn from_env() -> Self {
        Self::new(crate::env::dwell_timings())
    }

    pub fn new(enabled: bool) -> Self {
        PhaseClock {
            enabled,
            phases: Vec::new(),
        }
    }

    /// Runs `f`, recording how long it took under `phase`.
    ///
    /// Repeated phases (one per issue, say) are summed.
    pub fn time<T>(&mut self, phase: &'static str, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();
        match self.phases.iter_mut().find(|(name, _)| *name == phase) {
            Some((_, total)) => *total += elapsed,
            None => self.phases.push((phase, elapsed)),
        }
        result
    }

    pub fn phases(&self) -> &[(&'static str, Duration)] {
        &self.phases
    }

    /// Prints recorded phases to stderr.
    pub fn report(&self) {
        for (phase, elapsed) in &self.phases {
            eprintln!("[timings] {} {}ms", phase, elapsed.as_millis());
        }
    }
}

#[cfg(test)]
#[path = "timings_tests.rs"]
mod tests;
