//! Keyword scan used when neither rules nor the statistical model decided.
//!
//! It only ever answers "what kind of status": the result is always a status
//! subtype, never another category.

use crate::tokens::tokenize;

/// `(subtype, keywords)`, scanned in order.
pub const STATUS_SUBTYPES: &[(&str, &[&str])] = &[
    (
        "calories",
        &["calorie", "calories", "kcal", "eaten", "food", "nutrition", "protein", "meals"],
    ),
    (
        "exercise",
        &["workout", "workouts", "exercise", "exercised", "steps", "activity", "activities", "training", "mileage"],
    ),
    (
        "tasks",
        &["task", "tasks", "todo", "todos", "deadline", "deadlines", "backlog"],
    ),
    ("goals", &["goal", "goals", "weight", "streak", "milestone", "milestones"]),
];

pub fn status_subtype(text: &str) -> Option<&'static str> {
    let tokens = tokenize(text);
    STATUS_SUBTYPES
        .iter()
        .find(|(_, words)| tokens.iter().any(|t| words.contains(&t.as_str())))
        .map(|(subtype, _)| *subtype)
}
