//! Time-budget allocator.
//!
//! Splits the day between two competing goal categories by deadline pressure:
//! 1. per-category urgency = mean of [`ALLOCATION_LADDER`] over its deadlines
//!    (no deadlines => 0)
//! 2. shares = urgency / total urgency, or 50/50 when both are 0
//! 3. the exercise block comes off the top
//! 4. a buffer ratio of the rest is held back, the remainder is split by share
//!
//! Pure: no clock, no randomness.

use serde::{Deserialize, Serialize};

use crate::config::AllocationSection;
use crate::ladder::ALLOCATION_LADDER;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub category_a_hours: f64,
    pub category_b_hours: f64,
    pub exercise_minutes: f64,
    pub buffer_minutes: f64,
    /// Normalized shares; always sum to 1.
    pub category_a_share: f64,
    pub category_b_share: f64,
}

impl Allocation {
    pub fn total_minutes(&self) -> f64 {
        (self.category_a_hours + self.category_b_hours) * 60.0
            + self.exercise_minutes
            + self.buffer_minutes
    }
}

/// Mean ladder score over a category's days-to-deadline list.
pub fn category_urgency(deadline_days: &[i64]) -> f64 {
    if deadline_days.is_empty() {
        return 0.0;
    }
    let sum: f64 = deadline_days.iter().map(|d| ALLOCATION_LADDER.score(*d)).sum();
    sum / deadline_days.len() as f64
}

/// Normalized `(a, b)` shares from two urgencies.
pub fn normalize_shares(urgency_a: f64, urgency_b: f64) -> (f64, f64) {
    let total = urgency_a + urgency_b;
    if total <= 0.0 {
        return (0.5, 0.5);
    }
    let a = urgency_a / total;
    (a, 1.0 - a)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocator {
    exercise_minutes: f64,
    buffer_ratio: f64,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::from_config(&AllocationSection::default())
    }
}

impl Allocator {
    pub fn from_config(cfg: &AllocationSection) -> Self {
        Self {
            exercise_minutes: cfg.exercise_minutes,
            buffer_ratio: cfg.buffer_ratio,
        }
    }

    pub fn allocate(&self, category_a_days: &[i64], category_b_days: &[i64], total_hours: f64) -> Allocation {
        let urgency_a = category_urgency(category_a_days);
        let urgency_b = category_urgency(category_b_days);
        let (share_a, share_b) = normalize_shares(urgency_a, urgency_b);

        // f64::max drops NaN, so a NaN total degrades to zero as well.
        let total_minutes = (total_hours * 60.0).max(0.0);
        if total_minutes < self.exercise_minutes {
            tracing::warn!(
                total_hours,
                exercise_minutes = self.exercise_minutes,
                "available time does not cover the exercise block"
            );
        }
        let exercise_minutes = self.exercise_minutes.min(total_minutes);
        let remaining = total_minutes - exercise_minutes;
        let buffer_minutes = remaining * self.buffer_ratio;
        let productive = remaining - buffer_minutes;

        tracing::debug!(urgency_a, urgency_b, share_a, share_b, productive, "allocated day");

        Allocation {
            category_a_hours: productive * share_a / 60.0,
            category_b_hours: productive * share_b / 60.0,
            exercise_minutes,
            buffer_minutes,
            category_a_share: share_a,
            category_b_share: share_b,
        }
    }
}

/// Allocate with the default exercise block and buffer ratio.
pub fn allocate_time(category_a_days: &[i64], category_b_days: &[i64], total_hours: f64) -> Allocation {
    Allocator::default().allocate(category_a_days, category_b_days, total_hours)
}
