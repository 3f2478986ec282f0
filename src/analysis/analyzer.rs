//! Analyzer pipeline combining char filters, a tokenizer, and a normalizer.
//!
//! # Architecture
//!
//! The analyzer applies processing in this order:
//! 1. Char filters: clean the raw text (punctuation stripping)
//! 2. Tokenizer: split text into tokens
//! 3. Normalizer: rewrite each token into its canonical term
//!
//! The same analyzer instance serves both ingestion and queries:
//! [`Analyzer::analyze`] drives ingestion, [`Analyzer::normalize_term`]
//! normalizes user-supplied query terms identically.
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::analyzer::Analyzer;
//!
//! let analyzer = Analyzer::default();
//! let terms = analyzer.analyze("The cats sat.").unwrap();
//! let texts: Vec<&str> = terms.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["the", "cat", "sat"]);
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::punctuation::PunctuationStripFilter;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::normalizer::lemma::EnglishLemmatizer;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// A configurable analysis pipeline.
#[derive(Clone)]
pub struct Analyzer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    normalizer: Arc<dyn Normalizer>,
    name: String,
}

impl Analyzer {
    /// Create a new analyzer from a tokenizer and a normalizer, with no
    /// char filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, normalizer: Arc<dyn Normalizer>) -> Self {
        Analyzer {
            name: format!("{}_{}", tokenizer.name(), normalizer.name()),
            char_filters: Vec::new(),
            tokenizer,
            normalizer,
        }
    }

    /// Add a char filter to the front of the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the name of this analyzer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the full pipeline over raw text, producing normalized terms in
    /// document order.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut filtered = None;
        for char_filter in &self.char_filters {
            let input = filtered.as_deref().unwrap_or(text);
            filtered = Some(char_filter.filter(input));
        }

        let tokens = self.tokenizer.tokenize(filtered.as_deref().unwrap_or(text))?;
        Ok(tokens
            .map(|token| {
                let normalized = self.normalizer.normalize(&token.text);
                token.with_text(normalized)
            })
            .collect())
    }

    /// Normalize a single term exactly as ingestion would.
    ///
    /// Query-side helper; does not apply char filters or tokenization.
    pub fn normalize_term(&self, term: &str) -> String {
        self.normalizer.normalize(term)
    }
}

impl Default for Analyzer {
    /// The standard corpus analyzer: punctuation stripping, whitespace
    /// tokenization, English lemmatization.
    fn default() -> Self {
        Analyzer::new(
            Arc::new(WhitespaceTokenizer::new()),
            Arc::new(EnglishLemmatizer::new()),
        )
        .add_char_filter(Arc::new(PunctuationStripFilter::new()))
        .with_name("standard_corpus")
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("name", &self.name)
            .field("char_filters", &self.char_filters.len())
            .field("tokenizer", &self.tokenizer.name())
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}
