//! Reading word-per-line dictionary files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Read a word-per-line file into `(word, line_index)` pairs.
///
/// Lines are trimmed and blank lines are skipped, but the payload is always
/// the zero-based line index in the original file.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<(String, usize)>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = read_word_list_from(BufReader::new(file))?;
    debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Read `(word, line_index)` pairs from any buffered reader.
pub fn read_word_list_from<R: BufRead>(reader: R) -> Result<Vec<(String, usize)>> {
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push((word.to_string(), index));
        }
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_from_reader() {
        let input = "kitap\n\n  sakız  \ngel\n";
        let words = read_word_list_from(Cursor::new(input)).unwrap();

        assert_eq!(
            words,
            vec![
                ("kitap".to_string(), 0),
                ("sakız".to_string(), 2),
                ("gel".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_read_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "kitap").unwrap();
        writeln!(temp_file, "kitaplık").unwrap();
        temp_file.flush().unwrap();

        let words = read_word_list(temp_file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1], ("kitaplık".to_string(), 1));
    }

    #[test]
    fn test_missing_file() {
        assert!(read_word_list("/nonexistent/words.txt").is_err());
    }
}
