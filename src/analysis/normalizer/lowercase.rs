//! Lowercase normalizer implementation.

use crate::analysis::normalizer::Normalizer;

/// A normalizer that lowercases tokens and does nothing else.
///
/// # Examples
///
/// ```
/// use corpora::analysis::normalizer::Normalizer;
/// use corpora::analysis::normalizer::lowercase::LowercaseNormalizer;
///
/// let normalizer = LowercaseNormalizer::new();
/// assert_eq!(normalizer.normalize("Hello"), "hello");
/// assert_eq!(normalizer.normalize("cities"), "cities");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    /// Create a new lowercase normalizer.
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, token: &str) -> String {
        token.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = LowercaseNormalizer::new();
        assert_eq!(normalizer.normalize("WORLD"), "world");
        assert_eq!(normalizer.normalize("MiXeD"), "mixed");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = LowercaseNormalizer::new();
        let once = normalizer.normalize("Straße");
        assert_eq!(normalizer.normalize(&once), once);
    }
}
