//! aegis-core: goal/task records and the urgency-driven time allocation engine.

pub mod allocator;
pub mod config;
pub mod distance;
pub mod goals;
pub mod ladder;
pub mod metrics;
pub mod planner;
pub mod task;
pub mod time;
pub mod urgency;

pub use allocator::{allocate_time, category_urgency, Allocation, Allocator};
pub use config::{load_config, save_config, AllocationSection, ClassifierSection, PlannerConfig};
pub use distance::{round2, to_miles, DistanceUnit};
pub use goals::{Goal, GoalCategory, GoalStatus, PriorityTier};
pub use ladder::{DeadlineLadder, ALLOCATION_LADDER, URGENCY_LADDER};
pub use metrics::{
    analyze_fitness_trends, summarize_activities, summarize_metrics, ActivityRecord,
    ActivitySummary, ActivityTypeSummary, DailyMetrics, FitnessTrends, MetricsSummary,
};
pub use planner::{plan_day, plan_for, DayPlan, RankedTask};
pub use task::Task;
pub use time::{current_time_slot, local_now, local_today, ProductivityTier, TimeSlot};
pub use urgency::{score_breakdown, score_urgency, ScoreBreakdown, TaskPriorityFactors};
