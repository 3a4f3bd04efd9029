//! Goal records read from the persistence layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal category. `Phd` and `Work` compete for the productive part of the day;
/// `Health` is served by the fixed exercise block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Phd,
    Work,
    Health,
}

impl GoalCategory {
    /// Tier assumed for a goal of this category when none was recorded.
    pub fn default_tier(&self) -> PriorityTier {
        match self {
            GoalCategory::Phd | GoalCategory::Work => PriorityTier::High,
            GoalCategory::Health => PriorityTier::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Points this tier contributes to an urgency score (max 30).
    pub fn points(&self) -> f64 {
        match self {
            PriorityTier::Critical => 30.0,
            PriorityTier::High => 22.0,
            PriorityTier::Medium => 15.0,
            PriorityTier::Low => 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

/// A user goal. The core never mutates these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: String,
    pub category: GoalCategory,
    pub title: String,
    pub deadline: Option<NaiveDate>,
    pub priority_tier: PriorityTier,
    pub status: GoalStatus,
}

impl Goal {
    pub fn new(id: impl Into<String>, category: GoalCategory, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            deadline: None,
            priority_tier: category.default_tier(),
            status: GoalStatus::Active,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_tier(mut self, tier: PriorityTier) -> Self {
        self.priority_tier = tier;
        self
    }

    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Whole days from `today` to the deadline; negative when overdue.
    pub fn days_until_deadline(&self, today: NaiveDate) -> Option<i64> {
        self.deadline.map(|d| (d - today).num_days())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must be non-empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("title must be non-empty".to_string());
        }
        Ok(())
    }
}
