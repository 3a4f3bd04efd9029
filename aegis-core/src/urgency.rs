//! Urgency scorer: additive weighted model bounded to [0, 100].
//!
//! Terms (each independent, absent factors contribute nothing):
//! - deadline proximity, up to 40 (see [`URGENCY_LADDER`])
//! - goal priority tier, up to 30
//! - task size vs the current time slot, up to 20
//! - unresolved dependencies, flat 10
//!
//! A high-stakes deadline multiplies the sum by 1.5 before clamping.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::goals::{GoalCategory, PriorityTier};
use crate::ladder::URGENCY_LADDER;
use crate::time::TimeSlot;

pub const MAX_SCORE: f64 = 100.0;
pub const HIGH_STAKES_MULTIPLIER: f64 = 1.5;
const DEPENDENCY_POINTS: f64 = 10.0;
/// Slack allowed past the end of the slot for a "near fit".
const NEAR_FIT_MINUTES: u32 = 30;
const SHORT_TASK_MINUTES: u32 = 60;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPriorityFactors {
    pub deadline: Option<NaiveDate>,
    pub goal_category: Option<GoalCategory>,
    pub goal_priority_tier: Option<PriorityTier>,
    pub estimated_duration_minutes: Option<u32>,
    pub dependency_ids: Option<BTreeSet<String>>,
    pub is_high_stakes_deadline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTerm {
    pub name: &'static str,
    pub points: f64,
}

/// Per-term contributions, for explaining a ranking to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<ScoreTerm>,
    pub multiplier: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn points_for(&self, name: &str) -> Option<f64> {
        self.terms.iter().find(|t| t.name == name).map(|t| t.points)
    }
}

fn deadline_points(deadline: NaiveDate, today: NaiveDate) -> f64 {
    URGENCY_LADDER.score((deadline - today).num_days())
}

fn size_fit_points(minutes: u32, slot: &TimeSlot) -> f64 {
    if minutes <= slot.available_minutes {
        20.0
    } else if minutes <= slot.available_minutes.saturating_add(NEAR_FIT_MINUTES) {
        15.0
    } else if minutes <= SHORT_TASK_MINUTES {
        10.0
    } else {
        5.0
    }
}

/// Score with the full breakdown.
pub fn score_breakdown(
    factors: &TaskPriorityFactors,
    today: NaiveDate,
    slot: &TimeSlot,
) -> ScoreBreakdown {
    let mut terms = Vec::new();

    if let Some(deadline) = factors.deadline {
        terms.push(ScoreTerm {
            name: "deadline",
            points: deadline_points(deadline, today),
        });
    }

    let tier = factors
        .goal_priority_tier
        .or_else(|| factors.goal_category.map(|c| c.default_tier()));
    if let Some(tier) = tier {
        terms.push(ScoreTerm {
            name: "priority",
            points: tier.points(),
        });
    }

    if let Some(minutes) = factors.estimated_duration_minutes {
        terms.push(ScoreTerm {
            name: "size_fit",
            points: size_fit_points(minutes, slot),
        });
    }

    if factors.dependency_ids.as_ref().is_some_and(|d| !d.is_empty()) {
        terms.push(ScoreTerm {
            name: "dependencies",
            points: DEPENDENCY_POINTS,
        });
    }

    let multiplier = if factors.is_high_stakes_deadline {
        HIGH_STAKES_MULTIPLIER
    } else {
        1.0
    };
    let sum: f64 = terms.iter().map(|t| t.points).sum();
    let total = (sum * multiplier).clamp(0.0, MAX_SCORE);

    ScoreBreakdown {
        terms,
        multiplier,
        total,
    }
}

/// Urgency score in `[0, 100]`.
pub fn score_urgency(factors: &TaskPriorityFactors, today: NaiveDate, slot: &TimeSlot) -> f64 {
    score_breakdown(factors, today, slot).total
}
