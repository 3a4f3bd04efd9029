//! Entity extractors, one per category, run after the category is settled.
//!
//! Each returns best-effort partial results: a field that cannot be found is
//! simply absent. When several patterns could supply the same field, the
//! explicit number+unit pattern is tried before the vaguer "about N" one and
//! only the first satisfied pattern is used.

use std::sync::LazyLock;

use aegis_core::DistanceUnit;
use regex::Regex;

use crate::intent::{Entities, EntityValue, Intent, IntentCategory};

static RE_CALORIES_EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)\s*(?:calories|calorie|cals?|kcal)\b")
        .unwrap()
});

static RE_CALORIES_APPROX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:about|around|approximately|roughly)\s+((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)\b")
        .unwrap()
});

static RE_MEAL_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(breakfast|lunch|dinner|snack)\b").unwrap());

static RE_DURATION_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:hours?|hrs?|h)\b").unwrap()
});

static RE_DURATION_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*(?:minutes?|mins?|m)\b").unwrap());

static RE_DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(miles?|mi|km|kilomet(?:er|re)s?|k)\b").unwrap()
});

/// Command verbs at the start of a task phrase.
static RE_TASK_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^\s*
        (?:please\s+)?
        (?:
            (?:add|create|new)\s+(?:a\s+)?(?:new\s+)?(?:task|todo|to-do)(?:\s+to)?
          | remind\s+me\s+to
          | i\s+need\s+to
          | todo\s*:
          | (?:i\s+)?(?:just\s+)?(?:finished|completed|done\s+with)
          | mark\b
        )\s*",
    )
    .unwrap()
});

static RE_TASK_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*\b(?:for\s+|in\s+|takes?\s+)?(?:about\s+|around\s+)?\d+(?:\.\d+)?\s*(?:hours?|hrs?|h|minutes?|mins?|m)\b",
    )
    .unwrap()
});

static RE_TASK_DONE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+as\s+(?:done|complete|completed)\s*$").unwrap());

static RE_FILLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:please|thanks|thank\s+you)\b").unwrap());

/// First capture group as a number. Thousands separators are dropped.
fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
}

pub fn extract_calories(text: &str) -> Option<f64> {
    first_number(&RE_CALORIES_EXPLICIT, text).or_else(|| first_number(&RE_CALORIES_APPROX, text))
}

pub fn extract_meal_type(text: &str) -> Option<String> {
    RE_MEAL_TYPE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Duration in minutes. Hours are tried first and converted.
pub fn extract_duration_minutes(text: &str) -> Option<f64> {
    first_number(&RE_DURATION_HOURS, text)
        .map(|h| h * 60.0)
        .or_else(|| first_number(&RE_DURATION_MINUTES, text))
}

/// Distance and its unit token (`mile` or `km`), unconverted.
pub fn extract_distance(text: &str) -> Option<(f64, DistanceUnit)> {
    let caps = RE_DISTANCE.captures(text)?;
    let distance = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = DistanceUnit::parse(caps.get(2)?.as_str())?;
    Some((distance, unit))
}

/// Task title with command verbs, duration phrases and filler removed.
pub fn clean_task_title(text: &str) -> Option<String> {
    let s = RE_TASK_COMMAND.replace(text, "");
    let s = RE_TASK_DURATION.replace_all(&s, "");
    let s = RE_TASK_DONE_SUFFIX.replace(&s, "");
    let s = RE_FILLER.replace_all(&s, "");
    let title = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_string();
    (!title.is_empty()).then_some(title)
}

fn nutrition_entities(text: &str) -> Entities {
    let mut out = Entities::new();
    if let Some(c) = extract_calories(text) {
        out.insert("calories".into(), EntityValue::Number(c));
    }
    if let Some(m) = extract_meal_type(text) {
        out.insert("meal_type".into(), EntityValue::Text(m));
    }
    out
}

fn task_entities(text: &str, action: Option<&str>) -> Entities {
    let mut out = Entities::new();
    if let Some(d) = extract_duration_minutes(text) {
        out.insert("duration_minutes".into(), EntityValue::Number(d));
    }
    // Listing tasks has no subject.
    if action != Some("list") {
        if let Some(t) = clean_task_title(text) {
            out.insert("title".into(), EntityValue::Text(t));
        }
    }
    out
}

fn health_entities(text: &str) -> Entities {
    let mut out = Entities::new();
    if let Some((distance, unit)) = extract_distance(text) {
        out.insert("distance".into(), EntityValue::Number(distance));
        out.insert("unit".into(), EntityValue::Text(unit.as_str().to_string()));
    }
    out
}

/// Entities for `intent`'s category. Idempotent and independent of `classify`.
pub fn extract_entities(text: &str, intent: &Intent) -> Entities {
    match intent.category {
        IntentCategory::Nutrition => nutrition_entities(text),
        IntentCategory::Task => task_entities(text, intent.action.as_deref()),
        IntentCategory::Health => health_entities(text),
        IntentCategory::Planning
        | IntentCategory::Greeting
        | IntentCategory::Status
        | IntentCategory::Unknown => Entities::new(),
    }
}
