//! Command line argument parsing for the corpora CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// corpora - corpus indexing and vocabulary statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "corpora")]
#[command(about = "Build and query term/bigram indexes over a text corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorporaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorporaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the index and show corpus statistics
    Stats(StatsArgs),

    /// Query the index for a term or an adjacent pair
    Query(QueryArgs),

    /// Export the term and bigram indexes as JSON
    Export(ExportArgs),

    /// Export the growth (Heaps) and frequency-rank (Zipf) curves
    Curves(CurvesArgs),

    /// Interactive query shell over a freshly built index
    Shell(ShellArgs),
}

/// Ingestion options shared by all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct IngestArgs {
    /// Path to the corpus root directory
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// Ingest sequentially instead of using a worker pool
    #[arg(long)]
    pub sequential: bool,

    /// Worker thread count (defaults to available CPUs)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Abort the run on the first unreadable document instead of skipping it
    #[arg(long)]
    pub abort_on_error: bool,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

/// Arguments for the query command
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// The term to look up
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Second term; when given, the adjacent pair "TERM SECOND" is looked up
    #[arg(value_name = "SECOND_TERM")]
    pub second_term: Option<String>,

    /// Skip normalization of the query terms
    #[arg(long)]
    pub no_normalize: bool,

    /// List matching document paths instead of just reporting existence
    #[arg(short, long)]
    pub paths: bool,
}

/// Arguments for the export command
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Output file for the single-term index (JSON)
    #[arg(long, value_name = "FILE")]
    pub terms: Option<PathBuf>,

    /// Output file for the bigram index (JSON)
    #[arg(long, value_name = "FILE")]
    pub bigrams: Option<PathBuf>,
}

/// Arguments for the curves command
#[derive(Parser, Debug, Clone)]
pub struct CurvesArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Output file for the frequency-rank (Zipf) curve; stdout if omitted
    #[arg(long, value_name = "FILE")]
    pub zipf: Option<PathBuf>,

    /// Output file for the growth (Heaps) curve; stdout if omitted
    #[arg(long, value_name = "FILE")]
    pub heaps: Option<PathBuf>,
}

/// Arguments for the interactive shell
#[derive(Parser, Debug, Clone)]
pub struct ShellArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats() {
        let args = CorporaArgs::parse_from(["corpora", "stats", "corpus/"]);
        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Stats(stats) => {
                assert_eq!(stats.ingest.corpus_dir, PathBuf::from("corpus/"));
                assert!(!stats.ingest.sequential);
            }
            _ => panic!("expected stats command"),
        }
    }

    #[test]
    fn test_parse_pair_query() {
        let args = CorporaArgs::parse_from([
            "corpora", "-f", "json", "query", "corpus/", "cat", "sat", "--paths",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Query(query) => {
                assert_eq!(query.term, "cat");
                assert_eq!(query.second_term.as_deref(), Some("sat"));
                assert!(query.paths);
                assert!(!query.no_normalize);
            }
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = CorporaArgs::parse_from(["corpora", "-q", "-vvv", "stats", "corpus/"]);
        assert_eq!(args.verbosity(), 0);
    }
}
