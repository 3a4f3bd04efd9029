//! Day planner: turns the goal/task snapshot into today's allocation and a
//! ranked task list.
//!
//! Phd goals are category A and work goals are category B in the allocator;
//! health is served by the exercise block. The caller reads the snapshot,
//! calls [`plan_day`], and persists the returned [`DayPlan`].

use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::allocator::{Allocation, Allocator};
use crate::config::{AllocationSection, PlannerConfig};
use crate::goals::{Goal, GoalCategory};
use crate::task::Task;
use crate::time::{current_time_slot, TimeSlot};
use crate::urgency::score_urgency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    pub task_id: String,
    pub title: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: NaiveDate,
    pub time_slot: TimeSlot,
    pub allocation: Allocation,
    /// Highest score first.
    pub ranked_tasks: Vec<RankedTask>,
}

impl DayPlan {
    pub fn top(&self, n: usize) -> &[RankedTask] {
        &self.ranked_tasks[..n.min(self.ranked_tasks.len())]
    }
}

/// Days-to-deadline for the active goals of one category. Goals without a
/// deadline put no pressure on the split.
pub fn deadline_days(goals: &[Goal], category: GoalCategory, today: NaiveDate) -> Vec<i64> {
    goals
        .iter()
        .filter(|g| g.is_active() && g.category == category)
        .filter_map(|g| g.days_until_deadline(today))
        .collect()
}

pub fn plan_day(
    goals: &[Goal],
    tasks: &[Task],
    now_local: NaiveDateTime,
    total_hours: f64,
    cfg: &AllocationSection,
) -> DayPlan {
    let today = now_local.date();
    let time_slot = current_time_slot(&now_local);

    let phd_days = deadline_days(goals, GoalCategory::Phd, today);
    let work_days = deadline_days(goals, GoalCategory::Work, today);
    let allocation = Allocator::from_config(cfg).allocate(&phd_days, &work_days, total_hours);

    let by_id: HashMap<&str, &Goal> = goals.iter().map(|g| (g.id.as_str(), g)).collect();

    let mut ranked_tasks: Vec<RankedTask> = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter_map(|t| {
            let goal = t.goal_id.as_deref().and_then(|id| by_id.get(id).copied());
            if goal.is_some_and(|g| !g.is_active()) {
                return None;
            }
            let score = score_urgency(&t.priority_factors(goal), today, &time_slot);
            Some(RankedTask {
                task_id: t.id.clone(),
                title: t.title.clone(),
                score,
            })
        })
        .collect();

    ranked_tasks.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });

    tracing::info!(
        %today,
        phd_goals = phd_days.len(),
        work_goals = work_days.len(),
        tasks = ranked_tasks.len(),
        "composed day plan"
    );

    DayPlan {
        day: today,
        time_slot,
        allocation,
        ranked_tasks,
    }
}

/// Plan for the instant `now_utc`, in the configured timezone and with the
/// configured default day length.
pub fn plan_for(
    cfg: &PlannerConfig,
    goals: &[Goal],
    tasks: &[Task],
    now_utc: DateTime<Utc>,
) -> Result<DayPlan> {
    let now_local = cfg.local_now(now_utc)?.naive_local();
    Ok(plan_day(
        goals,
        tasks,
        now_local,
        cfg.allocation.default_total_hours,
        &cfg.allocation,
    ))
}
