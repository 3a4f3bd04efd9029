//! Planner configuration (TOML).
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub allocation: AllocationSection,
    pub classifier: ClassifierSection,
    pub workday: WorkdaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationSection {
    /// Fixed exercise block reserved before anything else.
    pub exercise_minutes: f64,
    /// Share of the post-exercise time held back as buffer.
    pub buffer_ratio: f64,
    pub default_total_hours: f64,
}

impl Default for AllocationSection {
    fn default() -> Self {
        Self {
            exercise_minutes: 45.0,
            buffer_ratio: 0.15,
            default_total_hours: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSection {
    pub rule_confidence: f64,
    /// Statistical fallback answers only strictly above this probability.
    pub statistical_threshold: f64,
    pub keyword_confidence: f64,
    /// Additive smoothing for the naive Bayes word likelihoods.
    pub smoothing: f64,
}

impl Default for ClassifierSection {
    fn default() -> Self {
        Self {
            rule_confidence: 0.9,
            statistical_threshold: 0.6,
            keyword_confidence: 0.7,
            smoothing: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdaySection {
    pub timezone: String,
}

impl Default for WorkdaySection {
    fn default() -> Self {
        Self {
            timezone: "America/Chicago".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse planner config")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize planner config")
    }

    pub fn validate(&self) -> Result<(), String> {
        let a = &self.allocation;
        if !(a.exercise_minutes.is_finite() && a.exercise_minutes >= 0.0) {
            return Err("allocation.exercise_minutes must be a non-negative number".to_string());
        }
        if !(0.0..1.0).contains(&a.buffer_ratio) {
            return Err("allocation.buffer_ratio must be in [0, 1)".to_string());
        }
        let c = &self.classifier;
        for (name, v) in [
            ("rule_confidence", c.rule_confidence),
            ("statistical_threshold", c.statistical_threshold),
            ("keyword_confidence", c.keyword_confidence),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(format!("classifier.{name} must be in [0, 1]"));
            }
        }
        if c.smoothing <= 0.0 {
            return Err("classifier.smoothing must be positive".to_string());
        }
        if self.workday.timezone.parse::<Tz>().is_err() {
            return Err(format!("workday.timezone '{}' is not an IANA zone", self.workday.timezone));
        }
        Ok(())
    }

    /// `now_utc` in the configured workday timezone.
    pub fn local_now(&self, now_utc: DateTime<Utc>) -> Result<DateTime<Tz>> {
        time::local_now(&self.workday.timezone, now_utc)
    }
}

/// Load config from `path`, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<PlannerConfig> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "planner config not found, using defaults");
        return Ok(PlannerConfig::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg = PlannerConfig::from_toml_str(&s)?;
    cfg.validate()
        .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
    Ok(cfg)
}

pub fn save_config(path: &Path, cfg: &PlannerConfig) -> Result<()> {
    let s = cfg.to_toml_string()?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
