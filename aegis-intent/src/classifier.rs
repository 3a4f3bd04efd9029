//! Intent classifier: an ordered pipeline of classification attempts.
//!
//! Stages run in a fixed order and the first one that produces an intent wins:
//! 1. pattern rules (fixed confidence)
//! 2. statistical fallback (confidence = model probability, above threshold)
//! 3. keyword scan for a status subtype (fixed confidence, status only)
//!
//! When none fires the result is the unknown intent with confidence 0.
//! Classification never fails; unclassifiable text is a normal outcome.

use anyhow::Result;

use aegis_core::ClassifierSection;

use crate::corpus::TrainingCorpus;
use crate::extract::extract_entities;
use crate::intent::{ClassificationStage, Entities, Intent, IntentCategory};
use crate::keywords::status_subtype;
use crate::naive_bayes::StatisticalClassifier;
use crate::rules::RuleMatcher;

const PIPELINE: [ClassificationStage; 3] = [
    ClassificationStage::Rule,
    ClassificationStage::Statistical,
    ClassificationStage::KeywordSubtype,
];

#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: RuleMatcher,
    model: StatisticalClassifier,
    cfg: ClassifierSection,
}

impl IntentClassifier {
    /// Train the statistical stage from `corpus`. Do this once at startup.
    pub fn new(rules: RuleMatcher, corpus: &TrainingCorpus, cfg: ClassifierSection) -> Self {
        let model = StatisticalClassifier::train(corpus, cfg.smoothing);
        Self { rules, model, cfg }
    }

    /// Built-in rules and corpus with default thresholds.
    pub fn builtin() -> Result<Self> {
        Self::with_config(ClassifierSection::default())
    }

    pub fn with_config(cfg: ClassifierSection) -> Result<Self> {
        let corpus = TrainingCorpus::builtin()?;
        Ok(Self::new(RuleMatcher::builtin(), &corpus, cfg))
    }

    pub fn model(&self) -> &StatisticalClassifier {
        &self.model
    }

    pub fn classify(&self, text: &str) -> Intent {
        let text = text.trim();
        if text.is_empty() {
            return Intent::unknown();
        }

        let intent = PIPELINE
            .iter()
            .find_map(|stage| self.attempt(*stage, text))
            .unwrap_or_else(Intent::unknown);

        if intent.is_unknown() {
            tracing::debug!(text, "no stage classified input");
        }
        intent
    }

    fn attempt(&self, stage: ClassificationStage, text: &str) -> Option<Intent> {
        match stage {
            ClassificationStage::Rule => self.by_rule(text),
            ClassificationStage::Statistical => self.by_statistics(text),
            ClassificationStage::KeywordSubtype => self.by_keyword(text),
            ClassificationStage::Unknown => None,
        }
    }

    fn by_rule(&self, text: &str) -> Option<Intent> {
        let m = self.rules.first_match(text)?;
        tracing::debug!(rule = m.rule_index, label = %m.label, "rule matched");
        Some(with_entities(
            Intent::from_label(&m.label, self.cfg.rule_confidence, ClassificationStage::Rule),
            text,
        ))
    }

    fn by_statistics(&self, text: &str) -> Option<Intent> {
        let (label, p) = self.model.decide(text, self.cfg.statistical_threshold)?;
        tracing::debug!(label = %label, probability = p, "statistical fallback accepted");
        Some(with_entities(
            Intent::from_label(&label, p, ClassificationStage::Statistical),
            text,
        ))
    }

    fn by_keyword(&self, text: &str) -> Option<Intent> {
        let subtype = status_subtype(text)?;
        tracing::debug!(subtype, "keyword subtype fallback");
        Some(Intent {
            category: IntentCategory::Status,
            action: None,
            confidence: self.cfg.keyword_confidence,
            entities: Entities::new(),
            subtype: Some(subtype.to_string()),
            stage: ClassificationStage::KeywordSubtype,
        })
    }
}

fn with_entities(mut intent: Intent, text: &str) -> Intent {
    intent.entities = extract_entities(text, &intent);
    intent
}
