//! Pattern rules: ordered `(pattern, category, action)` triples.
//!
//! Rules encode the exact phrasing users are expected to type, so a match is
//! treated as a high-certainty signal. Order matters: the first matching rule
//! wins, which lets more specific rules (status questions about calories)
//! shadow broader ones (logging a meal). The greeting rule only fires when the
//! whole message is a greeting, so "hi, had 500 calories" is still a meal.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::intent::{IntentCategory, Label};

/// Source form of a rule, compiled case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub category: IntentCategory,
    pub action: &'static str,
}

const fn rule(pattern: &'static str, category: IntentCategory, action: &'static str) -> RuleSpec {
    RuleSpec {
        pattern,
        category,
        action,
    }
}

pub const BUILTIN_RULES: &[RuleSpec] = &[
    rule(
        r"^\W*(hi|hello|hey|good\s+(morning|afternoon|evening))(\s+there)?\W*$",
        IntentCategory::Greeting,
        "hello",
    ),
    rule(
        r"\bplan\s+(my|the)\s+day\b|\bplan\s+today\b|\bwhat\s+should\s+i\s+(work\s+on|do|focus\s+on)\b|\b(schedule|plan)\s+for\s+today\b|\bsplit\s+my\s+time\b",
        IntentCategory::Planning,
        "plan_day",
    ),
    rule(
        r"\bhow\s+many\s+calories\b|\bcalories\s+(left|remaining)\b|\bcalorie\s+(count|total|budget)\b",
        IntentCategory::Status,
        "calories",
    ),
    rule(
        r"\bhow\s+am\s+i\s+doing\b|\b(show|give)\s+(me\s+)?(a\s+|my\s+)?(progress|summary|status|stats)\b|\bwhat\s+is\s+my\s+(status|progress)\b",
        IntentCategory::Status,
        "summary",
    ),
    rule(
        r"\b(ate|eaten|eat|had|drank)\b.*\b(breakfast|lunch|dinner|snack|meal|calories|kcal)\b|\b(\d+)\s*(calories|cals?|kcal)\b",
        IntentCategory::Nutrition,
        "log_meal",
    ),
    rule(
        r"\b(ran|run|jogged|walked|cycled|biked|rode|swam|hiked)\b.*?(\d+(?:\.\d+)?)\s*(miles?|mi|km|kilomet(?:er|re)s?|k)\b|\b(\d+(?:\.\d+)?)\s*(miles?|mi|km|k)\s+(run|walk|ride|jog|hike)\b",
        IntentCategory::Health,
        "log_activity",
    ),
    rule(
        r"\b(finished|completed|done\s+with)\b|\bmark\b.*\b(done|complete|completed)\b",
        IntentCategory::Task,
        "complete",
    ),
    rule(
        r"\b(show|list|what\s+are)\s+(me\s+)?(my\s+)?(tasks|todos|to-dos)\b",
        IntentCategory::Task,
        "list",
    ),
    rule(
        r"\b(add|create|new)\s+(a\s+)?(new\s+)?(task|todo|to-do)\b|\bremind\s+me\s+to\b|\bi\s+need\s+to\b|^\s*todo\s*:",
        IntentCategory::Task,
        "create",
    ),
];

static BUILTIN_MATCHER: LazyLock<RuleMatcher> =
    LazyLock::new(|| RuleMatcher::from_specs(BUILTIN_RULES).unwrap());

#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub pattern: Regex,
    pub label: Label,
}

/// A successful rule match: which rule, and the raw capture groups
/// (group 0 excluded, unmatched optional groups as `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub rule_index: usize,
    pub label: Label,
    pub captures: Vec<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct RuleMatcher {
    rules: Vec<ClassificationRule>,
}

impl RuleMatcher {
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|s| {
                let pattern = Regex::new(&format!("(?i){}", s.pattern))
                    .with_context(|| format!("compile rule for {}.{}", s.category, s.action))?;
                Ok(ClassificationRule {
                    pattern,
                    label: Label::new(s.category, s.action),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn builtin() -> Self {
        BUILTIN_MATCHER.clone()
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// First rule whose pattern matches `text`, or `None`.
    pub fn first_match(&self, text: &str) -> Option<RuleMatch> {
        self.rules.iter().enumerate().find_map(|(rule_index, r)| {
            r.pattern.captures(text).map(|caps| RuleMatch {
                rule_index,
                label: r.label.clone(),
                captures: caps
                    .iter()
                    .skip(1)
                    .map(|m| m.map(|m| m.as_str().to_string()))
                    .collect(),
            })
        })
    }
}

impl Default for RuleMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}
