//! Criterion benchmarks for the corpora indexer.
//!
//! Covers the hot paths of an ingestion run:
//! - Text analysis (punctuation stripping, tokenization, lemmatization)
//! - Index construction (term and bigram postings, statistics)
//! - Statistics curves over a built index

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use corpora::analysis::analyzer::Analyzer;
use corpora::index::builder::IndexBuilder;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "corpus", "index", "term", "token", "document", "vocabulary", "frequency", "growth",
        "sample", "query", "bigram", "posting", "registry", "statistics", "analysis", "normal",
        "curve", "rank", "scale", "distribution",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = Analyzer::default();
    let text = generate_test_documents(1).remove(0);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("analyze_document", |b| {
        b.iter(|| analyzer.analyze(black_box(&text)).unwrap())
    });
    group.finish();
}

fn bench_ingestion(c: &mut Criterion) {
    let documents = generate_test_documents(200);
    let total_bytes: usize = documents.iter().map(String::len).sum();

    let mut group = c.benchmark_group("ingestion");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.bench_function("ingest_200_documents", |b| {
        b.iter(|| {
            let mut builder = IndexBuilder::new(Arc::new(Analyzer::default()));
            for (i, text) in documents.iter().enumerate() {
                builder
                    .ingest_document(format!("doc{i}.txt"), black_box(text))
                    .unwrap();
            }
            builder.freeze()
        })
    });
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let documents = generate_test_documents(200);
    let mut builder = IndexBuilder::new(Arc::new(Analyzer::default()));
    for (i, text) in documents.iter().enumerate() {
        builder.ingest_document(format!("doc{i}.txt"), text).unwrap();
    }
    let index = builder.freeze();

    c.bench_function("frequency_rank_curve", |b| {
        b.iter(|| black_box(index.stats().frequency_rank_curve()))
    });
    c.bench_function("export_term_index", |b| {
        b.iter(|| black_box(index.export_term_index()))
    });
}

criterion_group!(benches, bench_analysis, bench_ingestion, bench_statistics);
criterion_main!(benches);
