//! Deadline step functions as explicit tables.
//!
//! Each ladder is an ordered list of `(max_days, score)` rungs. The first rung
//! whose `max_days` is `>=` the days remaining wins; past the last rung the
//! ladder yields its `beyond` score. Days are whole days, negative when overdue.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadlineLadder {
    pub rungs: &'static [(i64, f64)],
    pub beyond: f64,
}

impl DeadlineLadder {
    pub fn score(&self, days_remaining: i64) -> f64 {
        self.rungs
            .iter()
            .find(|(max_days, _)| days_remaining <= *max_days)
            .map(|(_, score)| *score)
            .unwrap_or(self.beyond)
    }

    /// Highest score any rung can produce.
    pub fn max_score(&self) -> f64 {
        self.rungs
            .iter()
            .map(|(_, s)| *s)
            .fold(self.beyond, f64::max)
    }
}

/// Deadline term of the urgency score (max 40). `-1` days means overdue.
pub const URGENCY_LADDER: DeadlineLadder = DeadlineLadder {
    rungs: &[(-1, 40.0), (3, 38.0), (7, 35.0), (14, 30.0), (30, 20.0)],
    beyond: 10.0,
};

/// Per-deadline pressure used when splitting the day between categories.
pub const ALLOCATION_LADDER: DeadlineLadder = DeadlineLadder {
    rungs: &[(7, 100.0), (14, 50.0), (30, 25.0)],
    beyond: 10.0,
};
