//! Command implementations for the corpora CLI.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::analyzer::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{IngestErrorPolicy, IngestOptions, ingest_corpus, ingest_corpus_parallel};
use crate::error::Result;
use crate::index::frozen::FrozenIndex;
use crate::query::QueryEngine;

/// Execute a CLI command.
pub fn execute_command(args: CorporaArgs) -> Result<()> {
    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Query(query_args) => run_query(query_args.clone(), &args),
        Command::Export(export_args) => export_index(export_args.clone(), &args),
        Command::Curves(curves_args) => export_curves(curves_args.clone(), &args),
        Command::Shell(shell_args) => run_shell(shell_args.clone(), &args),
    }
}

/// Build the index for a subcommand's ingestion options.
fn build_index(ingest: &IngestArgs, cli_args: &CorporaArgs) -> Result<Arc<FrozenIndex>> {
    if cli_args.verbosity() > 0 {
        println!("Indexing corpus at: {}", ingest.corpus_dir.display());
    }

    let options = IngestOptions {
        policy: if ingest.abort_on_error {
            IngestErrorPolicy::Abort
        } else {
            IngestErrorPolicy::Skip
        },
        threads: ingest.threads,
    };
    let analyzer = Arc::new(Analyzer::default());

    let index = if ingest.sequential {
        ingest_corpus(&ingest.corpus_dir, analyzer, &options)?
    } else {
        ingest_corpus_parallel(&ingest.corpus_dir, analyzer, &options)?
    };
    Ok(Arc::new(index))
}

/// Build the index and report corpus statistics.
fn show_stats(args: StatsArgs, cli_args: &CorporaArgs) -> Result<()> {
    let start = Instant::now();
    let index = build_index(&args.ingest, cli_args)?;

    output_result(
        "Corpus statistics",
        &StatsResult {
            corpus_dir: args.ingest.corpus_dir.display().to_string(),
            summary: index.summary(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Look up a term or adjacent pair.
fn run_query(args: QueryArgs, cli_args: &CorporaArgs) -> Result<()> {
    let index = build_index(&args.ingest, cli_args)?;
    let engine = QueryEngine::new(index);
    let normalize = !args.no_normalize;

    let result = query_result(&engine, &args.term, args.second_term.as_deref(), normalize, args.paths);
    output_result("Query result", &result, cli_args)
}

/// Run one lookup against the engine, producing an output struct.
fn query_result(
    engine: &QueryEngine,
    term: &str,
    second_term: Option<&str>,
    normalize: bool,
    with_paths: bool,
) -> QueryResult {
    let display_key = |t: &str| {
        if normalize {
            engine.index().analyzer().normalize_term(t)
        } else {
            t.to_string()
        }
    };

    match second_term {
        Some(second) => {
            let query = format!("{} {}", display_key(term), display_key(second));
            let paths = with_paths
                .then(|| engine.documents_for_pair(term, second, normalize))
                .flatten();
            QueryResult {
                found: engine.pair_exists(term, second, normalize),
                query,
                paths,
            }
        }
        None => {
            let query = display_key(term);
            let paths = with_paths
                .then(|| engine.documents_for_term(term, normalize))
                .flatten();
            QueryResult {
                found: engine.term_exists(term, normalize),
                query,
                paths,
            }
        }
    }
}

/// Export the indexes as JSON files.
fn export_index(args: ExportArgs, cli_args: &CorporaArgs) -> Result<()> {
    let index = build_index(&args.ingest, cli_args)?;
    let summary = index.summary();

    if let Some(path) = &args.terms {
        index.save_term_index(path)?;
    }
    if let Some(path) = &args.bigrams {
        index.save_bigram_index(path)?;
    }

    output_result(
        "Index exported",
        &ExportResult {
            distinct_terms: summary.distinct_terms,
            distinct_pairs: summary.distinct_pairs,
            term_index_file: args.terms.map(|p| p.display().to_string()),
            bigram_index_file: args.bigrams.map(|p| p.display().to_string()),
        },
        cli_args,
    )
}

fn zipf_series(index: &FrozenIndex) -> CurveSeries {
    CurveSeries {
        axes: ("log10(rank)".to_string(), "log10(frequency)".to_string()),
        points: index.stats().frequency_rank_curve(),
    }
}

fn heaps_series(index: &FrozenIndex) -> CurveSeries {
    CurveSeries {
        axes: (
            "log10(vocabulary size)".to_string(),
            "log10(tokens number)".to_string(),
        ),
        points: index.stats().growth_curve().to_vec(),
    }
}

fn save_series(series: &CurveSeries, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer(file, series)?;
    Ok(())
}

/// Export the Zipf and Heaps curves for external plotting.
fn export_curves(args: CurvesArgs, cli_args: &CorporaArgs) -> Result<()> {
    let index = build_index(&args.ingest, cli_args)?;

    let zipf = zipf_series(&index);
    let heaps = heaps_series(&index);

    let mut result = CurvesResult {
        zipf: None,
        heaps: None,
        zipf_file: None,
        heaps_file: None,
    };

    match &args.zipf {
        Some(path) => {
            save_series(&zipf, path)?;
            result.zipf_file = Some(path.display().to_string());
        }
        None => result.zipf = Some(zipf),
    }
    match &args.heaps {
        Some(path) => {
            save_series(&heaps, path)?;
            result.heaps_file = Some(path.display().to_string());
        }
        None => result.heaps = Some(heaps),
    }

    output_result("Curves exported", &result, cli_args)
}

/// Run the interactive query shell.
fn run_shell(args: ShellArgs, cli_args: &CorporaArgs) -> Result<()> {
    let index = build_index(&args.ingest, cli_args)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_shell_loop(index, &mut stdin.lock(), &mut stdout.lock())
}

/// The shell loop, generic over I/O so it is testable.
fn run_shell_loop<R: BufRead, W: Write>(
    index: Arc<FrozenIndex>,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let engine = QueryEngine::new(index.clone());

    loop {
        writeln!(output)?;
        writeln!(output, "Press 1 to show corpus statistics")?;
        writeln!(output, "Press 2 to check if a term (or pair) exists")?;
        writeln!(output, "Press 3 to show all document paths for a term (or pair)")?;
        writeln!(output, "Press 4 to save the Zipf and Heaps curves")?;
        writeln!(output, "Press 5 to exit")?;

        let choice = match prompt(input, output, "\nInput your choice: ")? {
            Some(line) => line,
            None => return Ok(()), // EOF
        };

        match choice.as_str() {
            "1" => {
                let summary = index.summary();
                writeln!(output, "Corpora files count: {}", summary.documents_ingested)?;
                writeln!(output, "Total tokens: {}", summary.total_tokens)?;
                writeln!(output, "Unique terms: {}", summary.distinct_terms)?;
                writeln!(output, "Unique pairs: {}", summary.distinct_pairs)?;
            }
            "2" | "3" => {
                let first = match prompt(input, output, "Input the first term: ")? {
                    Some(term) if !term.is_empty() => term,
                    _ => continue,
                };
                let second =
                    prompt(input, output, "Input the second term (empty if not needed): ")?
                        .filter(|s| !s.is_empty());

                if choice == "2" {
                    let found = match &second {
                        Some(second) => engine.pair_exists(&first, second, true),
                        None => engine.term_exists(&first, true),
                    };
                    writeln!(output, "{}", if found { "Exists" } else { "Does not exist" })?;
                } else {
                    let paths = match &second {
                        Some(second) => engine.documents_for_pair(&first, second, true),
                        None => engine.documents_for_term(&first, true),
                    };
                    match paths {
                        Some(paths) => {
                            for path in paths {
                                writeln!(output, "{path}")?;
                            }
                        }
                        None => writeln!(output, "Not found")?,
                    }
                }
            }
            "4" => {
                let zipf_path = prompt(input, output, "Zipf output file: ")?;
                let heaps_path = prompt(input, output, "Heaps output file: ")?;
                if let Some(path) = zipf_path.filter(|s| !s.is_empty()) {
                    save_series(&zipf_series(&index), Path::new(&path))?;
                    writeln!(output, "Wrote {path}")?;
                }
                if let Some(path) = heaps_path.filter(|s| !s.is_empty()) {
                    save_series(&heaps_series(&index), Path::new(&path))?;
                    writeln!(output, "Wrote {path}")?;
                }
            }
            "5" => return Ok(()),
            other => writeln!(output, "Unknown choice: {other}")?,
        }
    }
}

/// Print a prompt and read one trimmed line; `None` on EOF.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, msg: &str) -> Result<Option<String>> {
    write!(output, "{msg}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::IndexBuilder;
    use std::io::Cursor;

    fn test_index() -> Arc<FrozenIndex> {
        let mut builder = IndexBuilder::default();
        builder.ingest_document("a.txt", "The cat sat.").unwrap();
        builder.ingest_document("b.txt", "the dog").unwrap();
        Arc::new(builder.freeze())
    }

    #[test]
    fn test_query_result_term() {
        let engine = QueryEngine::new(test_index());
        let result = query_result(&engine, "Cat", None, true, true);
        assert!(result.found);
        assert_eq!(result.query, "cat");
        assert_eq!(result.paths.unwrap(), vec!["a.txt".to_string()]);
    }

    #[test]
    fn test_query_result_unknown_pair() {
        let engine = QueryEngine::new(test_index());
        let result = query_result(&engine, "dog", Some("cat"), true, true);
        assert!(!result.found);
        assert_eq!(result.query, "dog cat");
        assert!(result.paths.is_none());
    }

    #[test]
    fn test_shell_stats_and_exit() {
        let mut input = Cursor::new(b"1\n5\n".to_vec());
        let mut output = Vec::new();
        run_shell_loop(test_index(), &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Corpora files count: 2"));
        assert!(text.contains("Total tokens: 5"));
    }

    #[test]
    fn test_shell_term_lookup() {
        let mut input = Cursor::new(b"3\ncat\n\n5\n".to_vec());
        let mut output = Vec::new();
        run_shell_loop(test_index(), &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("a.txt"));
    }

    #[test]
    fn test_shell_handles_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        run_shell_loop(test_index(), &mut input, &mut output).unwrap();
    }
}
