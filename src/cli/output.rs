//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexitrieArgs, OutputFormat};
use crate::error::Result;

/// A ranked candidate as printed by the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub word: String,
    pub distance: usize,
    /// Line number of the word in the dictionary file, if it is a stored word.
    pub line: Option<usize>,
}

/// Result of lemmatizing one query.
#[derive(Debug, Serialize, Deserialize)]
pub struct LemmatizeResult {
    pub query: String,
    pub lemma: Option<String>,
    pub distance: Option<usize>,
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateEntry>>,
}

/// Results of a lemmatize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LemmatizeResults {
    pub results: Vec<LemmatizeResult>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Result of an exact membership check.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResult {
    pub word: String,
    pub exists: bool,
}

/// Result of a payload lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub line: Option<usize>,
}

/// Result of word list generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResult {
    pub output: String,
    pub sources: usize,
    pub unique_words: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexitrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexitrieArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    if let Some(results) = value.get("results").and_then(|r| r.as_array()) {
        output_lemmatize_human(results);
        if args.verbosity() > 1 {
            println!();
            output_generic_human(&value, &["results"]);
        }
        return Ok(());
    }

    match &value {
        serde_json::Value::Array(items) => {
            for item in items {
                println!("{}", format_row(item));
            }
        }
        _ => output_generic_human(&value, &[]),
    }
    Ok(())
}

/// Output lemmatization results, one query per line.
fn output_lemmatize_human(results: &[serde_json::Value]) {
    for result in results {
        let query = result.get("query").map(format_value).unwrap_or_default();
        match result.get("lemma").and_then(|l| l.as_str()) {
            Some(lemma) => {
                let distance = result.get("distance").map(format_value).unwrap_or_default();
                println!("{query} -> {lemma} (distance {distance})");
            }
            None => println!("{query} -> no match"),
        }

        if let Some(candidates) = result.get("candidates").and_then(|c| c.as_array()) {
            for candidate in candidates {
                let word = candidate.get("word").map(format_value).unwrap_or_default();
                let distance = candidate
                    .get("distance")
                    .map(format_value)
                    .unwrap_or_default();
                let marker = match candidate.get("line") {
                    Some(serde_json::Value::Number(_)) => "*",
                    _ => " ",
                };
                println!("  {marker} {word} ({distance})");
            }
        }
    }
}

/// Output object fields as `key: value` lines.
fn output_generic_human(value: &serde_json::Value, skip: &[&str]) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if skip.contains(&key.as_str()) {
                    continue;
                }
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Format an object as a single `key=value` row.
fn format_row(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join("\t"),
        _ => format_value(value),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexitrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}
