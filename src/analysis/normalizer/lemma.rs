//! English noun lemmatizer implementation.
//!
//! Lowercases a token and reduces common English noun inflections to their
//! singular form using WordNet-style suffix detachment rules plus a small
//! table of irregular and invariant forms. This is the default normalizer
//! for corpus ingestion.
//!
//! The rules are chosen to be idempotent: every output form is stable
//! under re-application, which the [`Normalizer`] contract requires.

use std::collections::HashMap;

use crate::analysis::normalizer::Normalizer;

/// Irregular plural forms mapped to their lemma.
const IRREGULAR: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
];

/// Words that look plural but are their own lemma.
const INVARIANT: &[&str] = &[
    "news",
    "series",
    "species",
    "physics",
    "mathematics",
    "economics",
    "politics",
];

/// An English noun lemmatizer.
///
/// Applies lowercasing followed by suffix detachment. Tokens that match no
/// rule pass through unchanged, so non-English and already-singular tokens
/// are safe inputs.
///
/// # Examples
///
/// ```
/// use corpora::analysis::normalizer::Normalizer;
/// use corpora::analysis::normalizer::lemma::EnglishLemmatizer;
///
/// let lemmatizer = EnglishLemmatizer::new();
/// assert_eq!(lemmatizer.normalize("Cats"), "cat");
/// assert_eq!(lemmatizer.normalize("glasses"), "glass");
/// assert_eq!(lemmatizer.normalize("Children"), "child");
/// assert_eq!(lemmatizer.normalize("running"), "running");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnglishLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer {
            irregular: IRREGULAR.iter().copied().collect(),
        }
    }

    /// Check if word ends with a specific suffix.
    fn ends_with(word: &str, suffix: &str) -> bool {
        word.len() > suffix.len() && word.ends_with(suffix)
    }

    /// Apply suffix detachment rules to an already-lowercased word.
    fn detach(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return (*lemma).to_string();
        }
        if word.len() <= 3 || INVARIANT.contains(&word) {
            return word.to_string();
        }

        if Self::ends_with(word, "sses") {
            return word[..word.len() - 2].to_string();
        }
        if Self::ends_with(word, "ies") {
            // "cities" -> "city", but short stems keep the "e": "ties" -> "tie".
            if word.len() >= 5 {
                return format!("{}y", &word[..word.len() - 3]);
            }
            return word[..word.len() - 1].to_string();
        }
        if Self::ends_with(word, "ves") && word.len() >= 5 {
            return format!("{}f", &word[..word.len() - 3]);
        }
        if Self::ends_with(word, "xes")
            || Self::ends_with(word, "zes")
            || Self::ends_with(word, "ches")
            || Self::ends_with(word, "shes")
        {
            return word[..word.len() - 2].to_string();
        }
        if Self::ends_with(word, "men") {
            return format!("{}man", &word[..word.len() - 3]);
        }
        if Self::ends_with(word, "s")
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

impl Normalizer for EnglishLemmatizer {
    fn normalize(&self, token: &str) -> String {
        self.detach(&token.to_lowercase())
    }

    fn name(&self) -> &'static str {
        "english_lemma"
    }
}
