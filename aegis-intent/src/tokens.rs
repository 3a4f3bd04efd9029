//! Word tokens for the statistical and keyword stages.

/// Function words that carry no intent signal.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "i", "me", "my", "to", "for", "of", "and", "is", "am", "are", "do", "did",
    "have", "has", "what", "how", "in", "on", "at", "it", "this", "that", "some", "just",
    "please", "with", "so", "far",
];

/// Lowercase alphanumeric words, minus stop words and bare numbers.
pub fn tokenize(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !STOP_WORDS.contains(t))
        .map(|t| t.to_string())
        .collect()
}
