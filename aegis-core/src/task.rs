//! Task records consumed by the planner.
//!
//! Tasks come from the persistence layer (synced from the task provider or
//! created from a classified intent). Storage is someone else's job; we keep
//! the shape small and serializable.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::goals::{Goal, GoalCategory, PriorityTier};
use crate::urgency::TaskPriorityFactors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,

    /// Goal this task advances, if attributed.
    pub goal_id: Option<String>,
    pub category: Option<GoalCategory>,

    /// Minutes.
    pub estimated_minutes: Option<u32>,

    pub deadline: Option<NaiveDate>,

    /// Ids of tasks that must finish first. Only unresolved ones are kept here.
    #[serde(default)]
    pub dependency_ids: BTreeSet<String>,

    /// Hard organizational deadline (grant, conference, defense).
    #[serde(default)]
    pub high_stakes: bool,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            goal_id: None,
            category: None,
            estimated_minutes: None,
            deadline: None,
            dependency_ids: BTreeSet::new(),
            high_stakes: false,
            completed: false,
        }
    }

    pub fn for_goal(mut self, goal: &Goal) -> Self {
        self.goal_id = Some(goal.id.clone());
        self.category = Some(goal.category);
        self
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependency_ids.insert(task_id.into());
        self
    }

    pub fn high_stakes(mut self) -> Self {
        self.high_stakes = true;
        self
    }

    /// Build scoring factors. The task's own deadline wins over the goal's;
    /// the goal supplies the priority tier.
    pub fn priority_factors(&self, goal: Option<&Goal>) -> TaskPriorityFactors {
        let deadline = self.deadline.or_else(|| goal.and_then(|g| g.deadline));
        let goal_priority_tier: Option<PriorityTier> = goal.map(|g| g.priority_tier);
        let goal_category = self.category.or_else(|| goal.map(|g| g.category));

        TaskPriorityFactors {
            deadline,
            goal_category,
            goal_priority_tier,
            estimated_duration_minutes: self.estimated_minutes,
            dependency_ids: if self.dependency_ids.is_empty() {
                None
            } else {
                Some(self.dependency_ids.clone())
            },
            is_high_stakes_deadline: self.high_stakes,
        }
    }
}
