//! Aggregate statistics over a window of commit history.

use chrono::{DateTime, Duration, Local};

use crate::models::Commit;

/// Totals for the commits that fall inside a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Length of the window in days.
    pub days: u32,
    pub total_commits: usize,
    pub total_milestones: usize,
}

impl Stats {
    /// Aggregate commits with `timestamp >= now - days`.
    ///
    /// A window reaching past the earliest representable date has no cutoff,
    /// so every commit counts.
    pub fn compute(commits: &[Commit], days: u32, now: DateTime<Local>) -> Self {
        let cutoff = Duration::try_days(i64::from(days))
            .and_then(|window| now.checked_sub_signed(window));
        let recent: Vec<&Commit> = commits
            .iter()
            .filter(|c| cutoff.is_none_or(|cutoff| c.timestamp >= cutoff))
            .collect();

        Self {
            days,
            total_commits: recent.len(),
            total_milestones: recent.iter().map(|c| c.milestones.len()).sum(),
        }
    }

    /// Mean milestones per commit, or `None` when the window is empty.
    pub fn average_milestones(&self) -> Option<f64> {
        if self.total_commits == 0 {
            return None;
        }
        Some(self.total_milestones as f64 / self.total_commits as f64)
    }
}
