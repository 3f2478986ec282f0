//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CorporaArgs, OutputFormat};
use crate::error::Result;
use crate::index::stats::StatsSummary;

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub corpus_dir: String,
    #[serde(flatten)]
    pub summary: StatsSummary,
    pub duration_ms: u64,
}

/// Result structure for query commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResult {
    /// The looked-up key, normalized if normalization was requested.
    pub query: String,
    pub found: bool,
    /// Matching document paths; only populated when requested and found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
}

/// Result structure for index export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub distinct_terms: u64,
    pub distinct_pairs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_index_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigram_index_file: Option<String>,
}

/// A numeric series for external plotting.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurveSeries {
    /// Axis labels, x then y (log10 scale on both).
    pub axes: (String, String),
    pub points: Vec<(f64, f64)>,
}

/// Result structure for the curves command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurvesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipf: Option<CurveSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heaps: Option<CurveSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipf_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heaps_file: Option<String>,
}

/// Output a command result in the configured format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CorporaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CorporaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    print_value("", &value);
    Ok(())
}

/// Generic key/value rendering of a JSON object tree.
fn print_value(indent: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        println!("{indent}{key}:");
                        print_value(&format!("{indent}  "), val);
                    }
                    _ => println!("{indent}{key}: {val}"),
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                match item {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        print_value(indent, item)
                    }
                    _ => println!("{indent}- {item}"),
                }
            }
        }
        _ => println!("{indent}{value}"),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CorporaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
