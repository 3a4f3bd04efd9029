use aegis_intent::{
    extract_entities, ClassificationStage, EntityValue, IntentCategory, IntentClassifier,
    TrainingCorpus,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn classifier() -> IntentClassifier {
    init_tracing();
    IntentClassifier::builtin().unwrap()
}

/// Every trained phrase must come back with its own label.
#[test]
fn test_corpus_phrases_classify_to_their_label() {
    let c = classifier();
    let corpus = TrainingCorpus::builtin().unwrap();
    for (text, label) in corpus.labeled() {
        let intent = c.classify(text);
        assert_eq!(intent.label(), Some(label.clone()), "text={text}");
        assert!(intent.confidence >= 0.6, "text={text} confidence={}", intent.confidence);
    }
}

#[test]
fn test_unclassifiable_input() {
    let c = classifier();
    for text in ["", "asdkjhaskjdh", "qwerty zxcvb"] {
        let intent = c.classify(text);
        assert!(intent.is_unknown(), "text={text:?}");
        assert_eq!(intent.confidence, 0.0);
        assert!(intent.entities.is_empty());
    }
}

#[test]
fn test_confidence_always_in_unit_range() {
    let c = classifier();
    let inputs = [
        "hello",
        "ran 5 km",
        "could you help me plan out today",
        "protein intake?",
        "had 900 calories for dinner",
        "nonsense words here",
    ];
    for text in inputs {
        let conf = c.classify(text).confidence;
        assert!((0.0..=1.0).contains(&conf), "text={text} confidence={conf}");
    }
}

#[test]
fn test_rule_matches_never_reach_the_model() {
    let c = classifier();
    for text in [
        "good morning, how many calories do i have left",
        "how many calories did i eat at lunch",
        "had 500 calories after i ran 3 miles",
        "mark grant proposal as done",
    ] {
        let intent = c.classify(text);
        assert_eq!(intent.stage, ClassificationStage::Rule, "text={text}");
        assert_eq!(intent.confidence, 0.9);
    }
}

#[test]
fn test_meal_logging_end_to_end() {
    let intent = classifier().classify("Had a burrito for lunch, about 700");
    assert_eq!(intent.category, IntentCategory::Nutrition);
    assert_eq!(intent.action.as_deref(), Some("log_meal"));
    assert_eq!(intent.number("calories"), Some(700.0));
    assert_eq!(intent.text("meal_type"), Some("lunch"));
}

#[test]
fn test_leading_greeting_does_not_swallow_a_meal() {
    let intent = classifier().classify("hi, I had 500 calories for lunch");
    assert_eq!(intent.category, IntentCategory::Nutrition);
    assert_eq!(intent.action.as_deref(), Some("log_meal"));
    assert_eq!(intent.number("calories"), Some(500.0));
    assert_eq!(intent.text("meal_type"), Some("lunch"));

    let greeting = classifier().classify("Hello there!");
    assert_eq!(greeting.category, IntentCategory::Greeting);
}

#[test]
fn test_meal_with_thousands_separator() {
    let intent = classifier().classify("had 1,200 calories for dinner");
    assert_eq!(intent.category, IntentCategory::Nutrition);
    assert_eq!(intent.number("calories"), Some(1200.0));
}

#[test]
fn test_task_creation_end_to_end() {
    let intent = classifier().classify("remind me to renew the parking permit in 2 hours");
    assert_eq!(intent.category, IntentCategory::Task);
    assert_eq!(intent.action.as_deref(), Some("create"));
    assert_eq!(intent.number("duration_minutes"), Some(120.0));
    assert_eq!(intent.text("title"), Some("renew the parking permit"));
}

#[test]
fn test_activity_logging_end_to_end() {
    let intent = classifier().classify("cycled 12.5 km after work");
    assert_eq!(intent.category, IntentCategory::Health);
    assert_eq!(intent.entities.get("distance"), Some(&EntityValue::Number(12.5)));
    assert_eq!(intent.text("unit"), Some("km"));
}

#[test]
fn test_keyword_fallback_only_yields_status() {
    let c = classifier();
    let cases = [
        ("protein intake?", "calories"),
        ("steps this week", "exercise"),
        ("backlog size", "tasks"),
        ("milestone check", "goals"),
    ];
    for (text, subtype) in cases {
        let intent = c.classify(text);
        assert_eq!(intent.stage, ClassificationStage::KeywordSubtype, "text={text}");
        assert_eq!(intent.category, IntentCategory::Status);
        assert_eq!(intent.subtype.as_deref(), Some(subtype));
        assert!(intent.action.is_none());
    }
}

#[test]
fn test_paraphrase_falls_back_to_model() {
    let intent = classifier().classify("could you help me plan out today");
    assert_eq!(intent.stage, ClassificationStage::Statistical);
    assert_eq!(intent.category, IntentCategory::Planning);
    assert!(intent.confidence > 0.6);
}

#[test]
fn test_extraction_is_idempotent_against_classify() {
    let c = classifier();
    let text = "add a task review pull requests for 2 hours";
    let intent = c.classify(text);
    assert_eq!(extract_entities(text, &intent), intent.entities);
    assert_eq!(extract_entities(text, &intent), extract_entities(text, &intent));
}

#[test]
fn test_intent_serializes_for_callers() {
    let intent = classifier().classify("walked 2 miles");
    let json = serde_json::to_value(&intent).unwrap();
    assert_eq!(json["category"], "health");
    assert_eq!(json["action"], "log_activity");
    assert_eq!(json["entities"]["distance"], 2.0);
    assert_eq!(json["stage"], "rule");
}
