//! Whitespace tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
///
/// This is the default tokenizer for corpus ingestion: after punctuation
/// stripping, whitespace boundaries are all that separate word-like units,
/// and intra-word characters such as the ASCII hyphen are preserved.
///
/// # Examples
///
/// ```
/// use corpora::analysis::tokenizer::Tokenizer;
/// use corpora::analysis::tokenizer::whitespace::WhitespaceTokenizer;
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("well-known  fact").unwrap().collect();
/// assert_eq!(tokens[0].text, "well-known");
/// assert_eq!(tokens[1].text, "fact");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
