//! Command implementations for the lexitrie CLI.

use std::time::Instant;

use log::{debug, info};

use crate::alternatives::AlternativeTable;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::lemmatizer::{Lemmatizer, LemmatizerConfig};
use crate::wordlist::{ColumnPolicy, WordListBuilder, read_word_list};

/// Execute a CLI command.
pub fn execute_command(args: LexitrieArgs) -> Result<()> {
    match &args.command {
        Command::Lemmatize(lemmatize_args) => lemmatize(lemmatize_args, &args),
        Command::Exists(exists_args) => exists(exists_args, &args),
        Command::Lookup(lookup_args) => lookup(lookup_args, &args),
        Command::BuildWordlist(build_args) => build_wordlist(build_args, &args),
    }
}

/// Load the dictionary and alternative table into a lemmatizer.
fn load_lemmatizer(dictionary: &DictionaryArgs, config: LemmatizerConfig) -> Result<Lemmatizer<usize>> {
    let start = Instant::now();

    let alternatives = match &dictionary.alternatives {
        Some(path) => {
            debug!("loading alternative table from {}", path.display());
            AlternativeTable::load_from_file(path)?
        }
        None => AlternativeTable::turkish(),
    };

    let lemmatizer = Lemmatizer::builder()
        .alternatives(alternatives)
        .normalization(dictionary.normalization)
        .config(config)
        .words(read_word_list(&dictionary.word_file)?)
        .build()?;

    info!(
        "loaded {} words from {} in {:?}",
        lemmatizer.trie().len(),
        dictionary.word_file.display(),
        start.elapsed()
    );

    Ok(lemmatizer)
}

/// Lemmatize each query.
fn lemmatize(args: &LemmatizeArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => LemmatizerConfig::load_from_file(path)?,
        None => LemmatizerConfig::default(),
    };
    if args.terminal_only {
        config.search.terminal_only = true;
    }
    if let Some(max_candidates) = args.max_candidates {
        config.max_candidates = max_candidates;
    }

    let lemmatizer = load_lemmatizer(&args.dictionary, config)?;
    let start = Instant::now();

    let mut results = Vec::with_capacity(args.queries.len());
    for query in &args.queries {
        let mut result = LemmatizeResult {
            query: query.clone(),
            lemma: None,
            distance: None,
            line: None,
            candidates: None,
        };

        if args.all {
            match lemmatizer.candidates(query.as_str()) {
                Ok(candidates) => {
                    if let Some(best) = candidates.first() {
                        result.lemma = Some(best.word.clone());
                        result.distance = Some(best.distance);
                        result.line = best.payload;
                    }
                    result.candidates = Some(
                        candidates
                            .into_iter()
                            .map(|lemma| CandidateEntry {
                                word: lemma.word,
                                distance: lemma.distance,
                                line: lemma.payload,
                            })
                            .collect(),
                    );
                }
                Err(e) if e.is_no_match() => {}
                Err(e) => return Err(e),
            }
        } else {
            match lemmatizer.lemmatize(query.as_str()) {
                Ok(lemma) => {
                    result.lemma = Some(lemma.word);
                    result.distance = Some(lemma.distance);
                    result.line = lemma.payload;
                }
                Err(e) if e.is_no_match() => {}
                Err(e) => return Err(e),
            }
        }

        results.push(result);
    }

    output_result(
        "Lemmatization results",
        &LemmatizeResults {
            results,
            dictionary_words: lemmatizer.trie().len(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Check exact membership of each word.
fn exists(args: &ExistsArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let lemmatizer = load_lemmatizer(&args.dictionary, LemmatizerConfig::default())?;

    let results = args
        .words
        .iter()
        .map(|word| {
            Ok(ExistsResult {
                word: word.clone(),
                exists: lemmatizer.exists(word.as_str())?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result("Membership", &results, cli_args)
}

/// Look up the line number of each word.
fn lookup(args: &LookupArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let lemmatizer = load_lemmatizer(&args.dictionary, LemmatizerConfig::default())?;

    let mut results = Vec::with_capacity(args.words.len());
    for word in &args.words {
        let line = match lemmatizer.lookup(word.as_str()) {
            Ok(line) => Some(*line),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };
        results.push(LookupResult {
            word: word.clone(),
            line,
        });
    }

    output_result("Lookup", &results, cli_args)
}

/// Build a word list from raw sources.
fn build_wordlist(args: &BuildWordlistArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let start = Instant::now();
    let mut builder = WordListBuilder::new()?.normalization(args.normalization);

    let sources = args
        .first
        .iter()
        .map(|path| (path, ColumnPolicy::First))
        .chain(args.second.iter().map(|path| (path, ColumnPolicy::Second)))
        .chain(args.all.iter().map(|path| (path, ColumnPolicy::All)));

    let mut source_count = 0;
    for (path, policy) in sources {
        builder.add_file(path, policy)?;
        source_count += 1;
    }

    builder.write_to_file(&args.output)?;

    output_result(
        "Word list written",
        &WordListResult {
            output: args.output.to_string_lossy().to_string(),
            sources: source_count,
            unique_words: builder.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_wordlist_command() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        let output = temp_dir.path().join("words.txt");
        fs::write(&first, "Kitap isim\nsakız isim\n").unwrap();
        fs::write(&second, "1 gel 98\n2 kitap 40\n").unwrap();

        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "-q",
            "build-wordlist",
            "-o",
            output.to_str().unwrap(),
            "--first",
            first.to_str().unwrap(),
            "--second",
            second.to_str().unwrap(),
        ])
        .unwrap();
        execute_command(args).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "gel\nkitap\nsakız\n");
    }

    #[test]
    fn test_lemmatize_command() {
        let temp_dir = TempDir::new().unwrap();
        let words = temp_dir.path().join("words.txt");
        fs::write(&words, "kitap\nkitaplık\nsakız\ngel\n").unwrap();

        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "-q",
            "--format",
            "json",
            "lemmatize",
            "--words",
            words.to_str().unwrap(),
            "--all",
            "sakiz",
            "zzz",
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_lookup_command_tolerates_missing_words() {
        let temp_dir = TempDir::new().unwrap();
        let words = temp_dir.path().join("words.txt");
        fs::write(&words, "kitap\ngel\n").unwrap();

        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "-q",
            "lookup",
            "--words",
            words.to_str().unwrap(),
            "gel",
            "gelmek",
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let args = LexitrieArgs::try_parse_from([
            "lexitrie",
            "exists",
            "--words",
            "/nonexistent/words.txt",
            "gel",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }
}
