//! aegis-intent: turns a short free-text message into a structured intent.
//!
//! Pattern rules first, then a naive Bayes fallback trained on the bundled
//! corpus, then a keyword scan for status questions. Entities are pulled out
//! per category once the category is settled.

pub mod classifier;
pub mod corpus;
pub mod extract;
pub mod intent;
pub mod keywords;
pub mod naive_bayes;
pub mod rules;
pub mod tokens;

pub use classifier::IntentClassifier;
pub use corpus::{TrainingCorpus, TrainingExample};
pub use extract::extract_entities;
pub use intent::{ClassificationStage, Entities, EntityValue, Intent, IntentCategory, Label};
pub use keywords::status_subtype;
pub use naive_bayes::StatisticalClassifier;
pub use rules::{RuleMatch, RuleMatcher, RuleSpec, BUILTIN_RULES};
