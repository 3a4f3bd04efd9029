//! Training corpus for the statistical fallback: a versioned list of
//! `{text, label}` records kept in TOML so it can be reviewed and extended
//! without touching the dispatch logic.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::intent::Label;

const BUILTIN_CORPUS: &str = include_str!("../data/corpus.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCorpus {
    pub version: u32,
    #[serde(rename = "example", default)]
    pub examples: Vec<TrainingExample>,
}

impl TrainingCorpus {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let corpus: TrainingCorpus = toml::from_str(s).context("parse training corpus")?;
        corpus
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid training corpus v{}: {e}", corpus.version))?;
        Ok(corpus)
    }

    /// The corpus shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CORPUS)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("load {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.examples.is_empty() {
            return Err("corpus has no examples".to_string());
        }
        for (idx, ex) in self.examples.iter().enumerate() {
            if ex.text.trim().is_empty() {
                return Err(format!("example[{idx}]: text must be non-empty"));
            }
            Label::parse(&ex.label).map_err(|e| format!("example[{idx}]: {e}"))?;
        }
        Ok(())
    }

    /// Examples with parsed labels. Invalid labels were rejected at load time.
    pub fn labeled(&self) -> impl Iterator<Item = (&str, Label)> {
        self.examples
            .iter()
            .filter_map(|ex| Label::parse(&ex.label).ok().map(|l| (ex.text.as_str(), l)))
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<Label> {
        let mut out: Vec<Label> = Vec::new();
        for (_, label) in self.labeled() {
            if !out.contains(&label) {
                out.push(label);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentCategory;

    #[test]
    fn test_builtin_corpus_loads() {
        let c = TrainingCorpus::builtin().unwrap();
        assert!(c.version >= 1);
        assert!(c.examples.len() >= 30);
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let c = TrainingCorpus::builtin().unwrap();
        let cats: Vec<IntentCategory> = c.labels().iter().map(|l| l.category).collect();
        for want in [
            IntentCategory::Nutrition,
            IntentCategory::Task,
            IntentCategory::Health,
            IntentCategory::Planning,
            IntentCategory::Greeting,
            IntentCategory::Status,
        ] {
            assert!(cats.contains(&want), "missing {want}");
        }
        assert!(!cats.contains(&IntentCategory::Unknown));
    }

    #[test]
    fn test_labels_keep_first_appearance_order() {
        let c = TrainingCorpus::from_toml_str(
            r#"
version = 3

[[example]]
text = "ran 2 miles"
label = "health.log_activity"

[[example]]
text = "hello"
label = "greeting.hello"

[[example]]
text = "jogged 1 km"
label = "health.log_activity"
"#,
        )
        .unwrap();
        let labels: Vec<String> = c.labels().iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, vec!["health.log_activity", "greeting.hello"]);
    }

    #[test]
    fn test_invalid_corpus_rejected() {
        let bad_label = "version = 1\n[[example]]\ntext = \"x\"\nlabel = \"nolabel\"\n";
        assert!(TrainingCorpus::from_toml_str(bad_label).is_err());

        let empty = "version = 1\n";
        assert!(TrainingCorpus::from_toml_str(empty).is_err());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = TrainingCorpus::load(Path::new("/nonexistent/aegis/corpus.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("read /nonexistent/aegis/corpus.toml"));
    }
}
