//! Query engine behavior over a frozen index.

use std::sync::Arc;

use corpora::analysis::analyzer::Analyzer;
use corpora::analysis::char_filter::punctuation::PunctuationStripFilter;
use corpora::analysis::normalizer::Normalizer;
use corpora::analysis::normalizer::lemma::EnglishLemmatizer;
use corpora::analysis::normalizer::lowercase::LowercaseNormalizer;
use corpora::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use corpora::error::Result;
use corpora::index::builder::IndexBuilder;
use corpora::query::QueryEngine;

fn engine_over(texts: &[(&str, &str)]) -> Result<QueryEngine> {
    let analyzer = Analyzer::new(
        Arc::new(WhitespaceTokenizer::new()),
        Arc::new(LowercaseNormalizer::new()),
    )
    .add_char_filter(Arc::new(PunctuationStripFilter::new()));

    let mut builder = IndexBuilder::new(Arc::new(analyzer));
    for (path, text) in texts {
        builder.ingest_document(*path, text)?;
    }
    Ok(QueryEngine::new(Arc::new(builder.freeze())))
}

#[test]
fn test_unknown_term_is_absent_not_empty() -> Result<()> {
    let engine = engine_over(&[("a.txt", "hello world")])?;

    // Absent, not an empty list.
    assert_eq!(engine.documents_for_term("nonexistent", true), None);
    assert_eq!(engine.documents_for_pair("no", "pair", true), None);
    assert!(!engine.term_exists("nonexistent", true));
    assert!(!engine.term_exists("", true));
    Ok(())
}

#[test]
fn test_found_terms_have_nonempty_paths() -> Result<()> {
    let engine = engine_over(&[("a.txt", "hello world"), ("b.txt", "hello again")])?;

    let paths = engine.documents_for_term("hello", true).unwrap();
    assert!(!paths.is_empty());

    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["a.txt".to_string(), "b.txt".to_string()]);
    Ok(())
}

#[test]
fn test_pair_order_matters() -> Result<()> {
    let engine = engine_over(&[("a.txt", "red green blue")])?;

    assert!(engine.pair_exists("red", "green", true));
    assert!(engine.pair_exists("green", "blue", true));
    assert!(!engine.pair_exists("green", "red", true));
    assert!(!engine.pair_exists("red", "blue", true)); // not adjacent
    Ok(())
}

#[test]
fn test_no_normalize_uses_raw_key() -> Result<()> {
    let engine = engine_over(&[("a.txt", "MiXeD case")])?;

    // Indexed form is lowercased; raw lookup must match exactly.
    assert!(engine.term_exists("mixed", false));
    assert!(!engine.term_exists("MiXeD", false));
    assert!(engine.term_exists("MiXeD", true));
    Ok(())
}

#[test]
fn test_prenormalized_terms_behave_like_ingested_tokens() -> Result<()> {
    // Idempotence means normalize(normalize(x)) == normalize(x), so a
    // caller may pass pre-normalized terms with normalize=true safely.
    let lemmatizer = EnglishLemmatizer::new();
    for raw in ["Cities", "glasses", "WOLVES", "children"] {
        let once = lemmatizer.normalize(raw);
        assert_eq!(lemmatizer.normalize(&once), once);
    }

    let analyzer = Analyzer::default();
    let mut builder = IndexBuilder::new(Arc::new(analyzer));
    builder.ingest_document("a.txt", "The wolves ran")?;
    let engine = QueryEngine::new(Arc::new(builder.freeze()));

    assert!(engine.term_exists("wolves", true));
    assert!(engine.term_exists("wolf", true));
    Ok(())
}

#[test]
fn test_multi_document_pair_paths() -> Result<()> {
    let engine = engine_over(&[
        ("a.txt", "stop right there"),
        ("b.txt", "stop right now"),
        ("c.txt", "go right there"),
    ])?;

    let mut paths = engine.documents_for_pair("stop", "right", true).unwrap();
    paths.sort();
    assert_eq!(paths, vec!["a.txt".to_string(), "b.txt".to_string()]);
    Ok(())
}
