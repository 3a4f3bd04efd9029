//! Daily nutrition/body metrics, recorded activities, and the period summary
//! used to answer "how am I doing" status questions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::distance::{round2, to_miles, DistanceUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub day: NaiveDate,
    pub calorie_in: i32,
    pub calorie_out: i32,
    pub protein_g: i32,
    pub weight_kg: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub days: usize,
    pub avg_calories_in: Option<f64>,
    pub avg_calories_out: Option<f64>,
    pub avg_protein_g: Option<f64>,
    pub avg_weight_kg: Option<f64>,
    pub min_weight_kg: Option<f64>,
    pub max_weight_kg: Option<f64>,
    pub insights: Vec<String>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

pub fn summarize_metrics(rows: &[DailyMetrics]) -> MetricsSummary {
    if rows.is_empty() {
        return MetricsSummary::default();
    }

    let avg_calories_in = mean(rows.iter().map(|r| r.calorie_in as f64));
    let avg_calories_out = mean(rows.iter().map(|r| r.calorie_out as f64));
    let avg_protein_g = mean(rows.iter().map(|r| r.protein_g as f64));
    let avg_weight_kg = mean(rows.iter().map(|r| r.weight_kg));
    let min_weight_kg = rows.iter().map(|r| r.weight_kg).reduce(f64::min);
    let max_weight_kg = rows.iter().map(|r| r.weight_kg).reduce(f64::max);

    let mut insights = Vec::new();
    if let (Some(lo), Some(hi)) = (min_weight_kg, max_weight_kg) {
        insights.push(format!("Weight variation: {:.1} kg", hi - lo));
    }
    if let (Some(cin), Some(cout)) = (avg_calories_in, avg_calories_out) {
        let deficit = cout - cin;
        let kind = if deficit > 0.0 { "deficit" } else { "surplus" };
        insights.push(format!(
            "Average daily calorie {kind}: {:.0} calories",
            deficit.abs()
        ));
    }

    MetricsSummary {
        days: rows.len(),
        avg_calories_in,
        avg_calories_out,
        avg_protein_g,
        avg_weight_kg,
        min_weight_kg,
        max_weight_kg,
        insights,
    }
}

/// One workout as reported by the fitness provider: meters and seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub day: NaiveDate,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub distance_m: f64,
    pub moving_time_s: u64,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub kilojoules: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTypeSummary {
    pub activity_type: String,
    pub count: usize,
    pub total_distance_miles: f64,
    pub total_moving_minutes: f64,
    /// Mean over the activities that recorded a heart rate.
    pub avg_heartrate: Option<f64>,
    pub total_kilojoules: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub period_days: u32,
    /// Sorted by activity type.
    pub by_type: Vec<ActivityTypeSummary>,
    pub total_activities: usize,
    pub insights: Vec<String>,
}

fn summarize_type(activity_type: &str, rows: &[&ActivityRecord]) -> ActivityTypeSummary {
    let meters: f64 = rows.iter().map(|r| r.distance_m).sum();
    let seconds: u64 = rows.iter().map(|r| r.moving_time_s).sum();
    let kilojoules: Vec<f64> = rows.iter().filter_map(|r| r.kilojoules).collect();

    ActivityTypeSummary {
        activity_type: activity_type.to_string(),
        count: rows.len(),
        total_distance_miles: round2(to_miles(meters, DistanceUnit::Meter)),
        total_moving_minutes: round2(seconds as f64 / 60.0),
        avg_heartrate: mean(rows.iter().filter_map(|r| r.average_heartrate)),
        total_kilojoules: (!kilojoules.is_empty()).then(|| kilojoules.iter().sum()),
    }
}

/// Per-type totals over a `period_days` window. The caller selects which
/// activities fall inside the window.
pub fn summarize_activities(activities: &[ActivityRecord], period_days: u32) -> ActivitySummary {
    let mut grouped: BTreeMap<&str, Vec<&ActivityRecord>> = BTreeMap::new();
    for a in activities {
        grouped.entry(a.activity_type.as_str()).or_default().push(a);
    }

    let by_type: Vec<ActivityTypeSummary> = grouped
        .iter()
        .map(|(activity_type, rows)| summarize_type(activity_type, rows))
        .collect();
    let total_activities: usize = by_type.iter().map(|t| t.count).sum();

    let mut insights = Vec::new();
    if total_activities > 0 {
        insights.push(format!("Total activities: {total_activities}"));
        if period_days > 0 {
            let per_week = total_activities as f64 / period_days as f64 * 7.0;
            insights.push(format!("Average activities per week: {per_week:.1}"));
        }
    }

    ActivitySummary {
        period_days,
        by_type,
        total_activities,
        insights,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessTrends {
    pub period_days: u32,
    pub activities: ActivitySummary,
    pub nutrition: MetricsSummary,
    /// Nutrition insights first, then activity insights.
    pub insights: Vec<String>,
}

pub fn analyze_fitness_trends(
    rows: &[DailyMetrics],
    activities: &[ActivityRecord],
    period_days: u32,
) -> FitnessTrends {
    let nutrition = summarize_metrics(rows);
    let activities = summarize_activities(activities, period_days);
    let insights = nutrition
        .insights
        .iter()
        .chain(activities.insights.iter())
        .cloned()
        .collect();

    tracing::debug!(
        period_days,
        metric_days = nutrition.days,
        activities = activities.total_activities,
        "analyzed fitness trends"
    );

    FitnessTrends {
        period_days,
        activities,
        nutrition,
        insights,
    }
}
