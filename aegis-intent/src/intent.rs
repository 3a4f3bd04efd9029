//! Intent model: the normalized result of classifying one piece of text.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentCategory {
    Nutrition,
    Task,
    Health,
    Planning,
    Greeting,
    Status,
    Unknown,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Nutrition => "nutrition",
            IntentCategory::Task => "task",
            IntentCategory::Health => "health",
            IntentCategory::Planning => "planning",
            IntentCategory::Greeting => "greeting",
            IntentCategory::Status => "status",
            IntentCategory::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nutrition" => Some(IntentCategory::Nutrition),
            "task" => Some(IntentCategory::Task),
            "health" => Some(IntentCategory::Health),
            "planning" => Some(IntentCategory::Planning),
            "greeting" => Some(IntentCategory::Greeting),
            "status" => Some(IntentCategory::Status),
            "unknown" => Some(IntentCategory::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-level `category.action` label, as used by the training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label {
    pub category: IntentCategory,
    pub action: String,
}

impl Label {
    pub fn new(category: IntentCategory, action: impl Into<String>) -> Self {
        Self {
            category,
            action: action.into(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let (cat, action) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("label '{s}' is not of the form category.action"))?;
        let category = IntentCategory::parse(cat).ok_or_else(|| format!("unknown category '{cat}' in label '{s}'"))?;
        if category == IntentCategory::Unknown {
            return Err(format!("label '{s}' cannot target the unknown category"));
        }
        let action = action.trim();
        if action.is_empty() || action.contains('.') {
            return Err(format!("label '{s}' has an invalid action"));
        }
        Ok(Self::new(category, action))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.action)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityValue {
    Number(f64),
    Text(String),
}

impl EntityValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EntityValue::Number(n) => Some(*n),
            EntityValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EntityValue::Text(s) => Some(s),
            EntityValue::Number(_) => None,
        }
    }
}

pub type Entities = BTreeMap<String, EntityValue>;

/// Which pipeline stage produced an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationStage {
    Rule,
    Statistical,
    KeywordSubtype,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub category: IntentCategory,
    pub action: Option<String>,
    /// In `[0, 1]`.
    pub confidence: f64,
    #[serde(default)]
    pub entities: Entities,
    pub subtype: Option<String>,
    pub stage: ClassificationStage,
}

impl Intent {
    pub fn unknown() -> Self {
        Self {
            category: IntentCategory::Unknown,
            action: None,
            confidence: 0.0,
            entities: Entities::new(),
            subtype: None,
            stage: ClassificationStage::Unknown,
        }
    }

    pub fn from_label(label: &Label, confidence: f64, stage: ClassificationStage) -> Self {
        Self {
            category: label.category,
            action: Some(label.action.clone()),
            confidence: confidence.clamp(0.0, 1.0),
            entities: Entities::new(),
            subtype: None,
            stage,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category == IntentCategory::Unknown
    }

    /// `category.action` when an action is set.
    pub fn label(&self) -> Option<Label> {
        self.action
            .as_ref()
            .map(|a| Label::new(self.category, a.clone()))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.entities.get(key).and_then(EntityValue::as_number)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.entities.get(key).and_then(EntityValue::as_text)
    }
}
