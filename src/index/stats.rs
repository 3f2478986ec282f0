//! Corpus statistics: token accounting, vocabulary growth, frequency ranks.
//!
//! [`CorpusStats`] accumulates counters during ingestion and, once the
//! index is frozen, serves the two log-log series used for empirical
//! vocabulary analysis:
//!
//! - the **growth curve** (Heaps'-law-style): one
//!   `(log10(vocabulary size), log10(token occurrences))` sample captured
//!   every [`GROWTH_SAMPLE_INTERVAL`] ingested documents, and
//! - the **frequency-rank curve** (Zipf's-law-style): terms ordered by
//!   descending corpus frequency, paired with `log10` of their rank.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Number of ingested documents between growth-curve samples.
pub const GROWTH_SAMPLE_INTERVAL: u64 = 100;

/// Point-in-time statistics summary over a finished index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Documents processed, including empty ones.
    pub documents_ingested: u64,

    /// Sum of per-document token counts, before deduplication.
    pub total_tokens: u64,

    /// Number of distinct terms in the single-term index.
    pub distinct_terms: u64,

    /// Number of distinct adjacent pairs in the bigram index.
    pub distinct_pairs: u64,
}

/// Running corpus statistics, owned by the index builder during ingestion.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    documents_ingested: u64,
    total_tokens: u64,
    frequency_dist: AHashMap<String, u64>,
    growth_samples: Vec<(f64, f64)>,
}

impl CorpusStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        CorpusStats::default()
    }

    /// Record one occurrence of a term.
    pub fn record_term(&mut self, term: &str) {
        if let Some(count) = self.frequency_dist.get_mut(term) {
            *count += 1;
        } else {
            self.frequency_dist.insert(term.to_string(), 1);
        }
    }

    /// Record the end of a document with the given token count.
    ///
    /// Advances the document and token counters and, on every
    /// [`GROWTH_SAMPLE_INTERVAL`]-th document, appends a growth sample
    /// `(log10(distinct terms), log10(total term occurrences))`.
    pub fn finish_document(&mut self, token_count: u64) {
        self.total_tokens += token_count;
        self.documents_ingested += 1;

        if self.documents_ingested % GROWTH_SAMPLE_INTERVAL == 0 {
            let vocabulary = self.frequency_dist.len() as f64;
            let occurrences = self.total_tokens as f64;
            self.growth_samples
                .push((vocabulary.log10(), occurrences.log10()));
        }
    }

    /// Documents processed so far, including empty ones.
    pub fn documents_ingested(&self) -> u64 {
        self.documents_ingested
    }

    /// Total token occurrences across the corpus.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of distinct terms observed.
    pub fn distinct_terms(&self) -> u64 {
        self.frequency_dist.len() as u64
    }

    /// Corpus-wide occurrence count for a term, 0 if unseen.
    pub fn term_frequency(&self, term: &str) -> u64 {
        self.frequency_dist.get(term).copied().unwrap_or(0)
    }

    /// The accumulated growth samples, in capture order.
    ///
    /// Empty when fewer than [`GROWTH_SAMPLE_INTERVAL`] documents were
    /// ingested.
    pub fn growth_curve(&self) -> &[(f64, f64)] {
        &self.growth_samples
    }

    /// The frequency-rank curve as `(log10(rank), log10(frequency))`.
    ///
    /// Terms are sorted by descending frequency; ties break by ascending
    /// term order so the curve is reproducible across runs. Ranks start
    /// at 1.
    pub fn frequency_rank_curve(&self) -> Vec<(f64, f64)> {
        let mut entries: Vec<(&str, u64)> = self
            .frequency_dist
            .iter()
            .map(|(term, count)| (term.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        entries
            .iter()
            .enumerate()
            .map(|(i, (_, freq))| (((i + 1) as f64).log10(), (*freq as f64).log10()))
            .collect()
    }
}
