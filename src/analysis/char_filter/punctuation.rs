//! Punctuation stripping char filter.
//!
//! Removes a fixed set of punctuation characters from raw text before
//! tokenization. Characters are deleted outright rather than replaced with
//! whitespace, so tokens that were only separated by punctuation merge
//! (`"foo,bar"` becomes `"foobar"`). This mirrors a translate-and-delete
//! cleanup step and is intentional, not a bug.
//!
//! The ASCII hyphen is deliberately absent from the set, so hyphenated
//! words survive intact; the en dash (U+2013) is stripped.
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::char_filter::CharFilter;
//! use corpora::analysis::char_filter::punctuation::PunctuationStripFilter;
//!
//! let filter = PunctuationStripFilter::new();
//! assert_eq!(filter.filter("well-known (fact)!"), "well-known fact");
//! ```

use crate::analysis::char_filter::CharFilter;

/// The exact character set removed from raw text.
pub const STRIPPED_CHARS: &str = "!\"#$%&'()*+,\u{2013}./:;<=>?@[\\]^_`{|}~";

/// A char filter that deletes punctuation characters from text.
#[derive(Clone, Debug, Default)]
pub struct PunctuationStripFilter;

impl PunctuationStripFilter {
    /// Create a new punctuation strip filter.
    pub fn new() -> Self {
        PunctuationStripFilter
    }

    /// Check whether a character belongs to the stripped set.
    pub fn is_stripped(c: char) -> bool {
        STRIPPED_CHARS.contains(c)
    }
}

impl CharFilter for PunctuationStripFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !Self::is_stripped(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "punctuation_strip"
    }
}
