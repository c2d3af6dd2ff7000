//! Command line argument parsing for the lexitrie CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::trie::CaseNormalization;

/// lexitrie - closest-word lookup over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "lexitrie")]
#[command(about = "Fuzzy closest-word lookup over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexitrieArgs {
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

impl LexitrieArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the closest stored word for each query
    Lemmatize(LemmatizeArgs),

    /// Check whether words are stored exactly
    Exists(ExistsArgs),

    /// Print the zero-based line index of stored words
    Lookup(LookupArgs),

    /// Build a sorted, deduplicated word list from raw sources
    #[command(name = "build-wordlist")]
    BuildWordlist(BuildWordlistArgs),
}

/// Where the dictionary comes from and how it is folded
#[derive(Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// Word-per-line dictionary file
    #[arg(short = 'w', long = "words", value_name = "WORD_FILE")]
    pub word_file: PathBuf,

    /// Alternative table (JSON); defaults to the built-in Turkish table
    #[arg(short, long, value_name = "TABLE_FILE")]
    pub alternatives: Option<PathBuf>,

    /// Case normalization (lowercase, turkish, none)
    #[arg(long, default_value = "lowercase")]
    pub normalization: CaseNormalization,
}

/// Arguments for lemmatization
#[derive(Parser, Debug, Clone)]
pub struct LemmatizeArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Lemmatizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Only consider candidates that are stored words
    #[arg(long)]
    pub terminal_only: bool,

    /// Show the ranked candidates instead of only the best one
    #[arg(long)]
    pub all: bool,

    /// Maximum number of ranked candidates to show
    #[arg(short = 'n', long)]
    pub max_candidates: Option<usize>,

    /// Words to lemmatize
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,
}

/// Arguments for exact membership checks
#[derive(Parser, Debug, Clone)]
pub struct ExistsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for payload lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for word list generation
#[derive(Parser, Debug, Clone)]
pub struct BuildWordlistArgs {
    /// Output file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Source files whose first token per line is a word
    #[arg(long = "first", value_name = "SOURCE_FILE")]
    pub first: Vec<PathBuf>,

    /// Source files whose second token per line is a word
    #[arg(long = "second", value_name = "SOURCE_FILE")]
    pub second: Vec<PathBuf>,

    /// Source files where every token is a word
    #[arg(long = "all", value_name = "SOURCE_FILE")]
    pub all: Vec<PathBuf>,

    /// Case normalization (lowercase, turkish, none)
    #[arg(long, default_value = "lowercase")]
    pub normalization: CaseNormalization,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lemmatize() {
        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "-vv",
            "lemmatize",
            "--words",
            "words.txt",
            "--terminal-only",
            "sakiz",
            "geel",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Lemmatize(lemmatize) => {
                assert_eq!(lemmatize.dictionary.word_file, PathBuf::from("words.txt"));
                assert_eq!(
                    lemmatize.dictionary.normalization,
                    CaseNormalization::Lowercase
                );
                assert!(lemmatize.terminal_only);
                assert_eq!(lemmatize.queries, vec!["sakiz", "geel"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_build_wordlist() {
        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "-q",
            "build-wordlist",
            "-o",
            "words.txt",
            "--first",
            "a.txt",
            "--second",
            "b.txt",
            "--first",
            "c.txt",
            "--normalization",
            "turkish",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 0);
        match args.command {
            Command::BuildWordlist(build) => {
                assert_eq!(build.first.len(), 2);
                assert_eq!(build.second.len(), 1);
                assert!(build.all.is_empty());
                assert_eq!(build.normalization, CaseNormalization::Turkish);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_queries_required() {
        assert!(LexitrieArgs::try_parse_from(["lexitrie", "exists", "--words", "w.txt"]).is_err());
    }
}
