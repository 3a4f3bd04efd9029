//! Statistical fallback: multinomial naive Bayes over word tokens.
//!
//! Trained once from the labeled corpus. It is a safety net for paraphrases
//! of the trained phrasing families, not a general intent model. Training is
//! deterministic for a given corpus order.

use std::collections::{BTreeSet, HashMap};

use crate::corpus::TrainingCorpus;
use crate::intent::Label;
use crate::tokens::tokenize;

#[derive(Debug, Clone)]
pub struct StatisticalClassifier {
    labels: Vec<Label>,
    log_priors: Vec<f64>,
    /// `word_counts[label_idx][word]`
    word_counts: Vec<HashMap<String, f64>>,
    total_words: Vec<f64>,
    vocabulary: BTreeSet<String>,
    smoothing: f64,
}

impl StatisticalClassifier {
    pub fn train(corpus: &TrainingCorpus, smoothing: f64) -> Self {
        let labels = corpus.labels();
        let mut doc_counts = vec![0usize; labels.len()];
        let mut word_counts: Vec<HashMap<String, f64>> = vec![HashMap::new(); labels.len()];
        let mut total_words = vec![0.0; labels.len()];
        let mut vocabulary = BTreeSet::new();

        for (text, label) in corpus.labeled() {
            let Some(idx) = labels.iter().position(|l| *l == label) else {
                continue;
            };
            doc_counts[idx] += 1;
            for tok in tokenize(text) {
                *word_counts[idx].entry(tok.clone()).or_insert(0.0) += 1.0;
                total_words[idx] += 1.0;
                vocabulary.insert(tok);
            }
        }

        let n_docs: usize = doc_counts.iter().sum();
        let log_priors = doc_counts
            .iter()
            .map(|&c| (c as f64 / n_docs.max(1) as f64).ln())
            .collect();

        tracing::info!(
            labels = labels.len(),
            vocabulary = vocabulary.len(),
            examples = n_docs,
            "trained statistical intent classifier"
        );

        Self {
            labels,
            log_priors,
            word_counts,
            total_words,
            vocabulary,
            smoothing,
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Label probabilities, highest first (ties keep corpus order). Empty when
    /// the text shares no vocabulary with the corpus.
    pub fn predict(&self, text: &str) -> Vec<(Label, f64)> {
        let tokens: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|t| self.vocabulary.contains(t))
            .collect();
        if tokens.is_empty() || self.labels.is_empty() {
            return Vec::new();
        }

        let v = self.vocabulary.len() as f64;
        let log_scores: Vec<f64> = (0..self.labels.len())
            .map(|i| {
                let denom = self.total_words[i] + self.smoothing * v;
                self.log_priors[i]
                    + tokens
                        .iter()
                        .map(|t| {
                            let c = self.word_counts[i].get(t).copied().unwrap_or(0.0);
                            ((c + self.smoothing) / denom).ln()
                        })
                        .sum::<f64>()
            })
            .collect();

        // log-sum-exp normalization
        let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
        let z: f64 = exps.iter().sum();

        let mut ranked: Vec<(Label, f64)> = self
            .labels
            .iter()
            .cloned()
            .zip(exps.into_iter().map(|e| e / z))
            .collect();
        // Stable sort keeps corpus order among equal probabilities.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Top label if its probability is strictly above `threshold`.
    pub fn decide(&self, text: &str, threshold: f64) -> Option<(Label, f64)> {
        self.predict(text)
            .into_iter()
            .next()
            .filter(|(_, p)| *p > threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> StatisticalClassifier {
        StatisticalClassifier::train(&TrainingCorpus::builtin().unwrap(), 0.1)
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let ranked = model().predict("how many calories today");
        let total: f64 = ranked.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_paraphrase_of_planning() {
        let (label, p) = model().decide("could you help me plan out today", 0.6).unwrap();
        assert_eq!(label.to_string(), "planning.plan_day");
        assert!(p > 0.6);
    }

    #[test]
    fn test_unknown_vocabulary_yields_nothing() {
        let m = model();
        assert!(m.predict("asdkjhaskjdh").is_empty());
        assert!(m.predict("").is_empty());
        assert!(m.decide("zzz qqq", 0.0).is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        let m = model();
        let ranked = m.predict("list todos");
        let (_, top) = ranked[0].clone();
        assert!(m.decide("list todos", top).is_none());
        assert!(m.decide("list todos", top - 1e-6).is_some());
    }

    #[test]
    fn test_training_is_deterministic() {
        let a = model().predict("went for a run today");
        let b = model().predict("went for a run today");
        assert_eq!(a, b);
    }

    #[test]
    fn test_trained_phrases_rank_their_own_label_first() {
        let m = model();
        let corpus = TrainingCorpus::builtin().unwrap();
        for (text, label) in corpus.labeled() {
            let ranked = m.predict(text);
            assert_eq!(ranked[0].0, label, "text={text}");
        }
    }
}
