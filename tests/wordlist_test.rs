use std::fs;

use lexitrie::prelude::*;
use tempfile::TempDir;

#[test]
fn test_build_then_lemmatize() {
    let temp_dir = TempDir::new().unwrap();
    let frequencies = temp_dir.path().join("frequencies.txt");
    let corpus = temp_dir.path().join("corpus.txt");
    let output = temp_dir.path().join("words.txt");

    fs::write(&frequencies, "1 Kitap 120\n2 gel 98\n3 2023 50\n").unwrap();
    fs::write(&corpus, "Sakız ve kitaplık, gel!\n").unwrap();

    let mut builder = WordListBuilder::new().unwrap();
    builder.add_file(&frequencies, ColumnPolicy::Second).unwrap();
    builder.add_file(&corpus, ColumnPolicy::All).unwrap();
    builder.write_to_file(&output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "gel\nkitap\nkitaplık\nsakız\nve\n"
    );

    let lemmatizer = Lemmatizer::from_word_list(&output).unwrap();
    let lemma = lemmatizer.lemmatize("sakiz").unwrap();
    assert_eq!(lemma.word, "sakız");
    assert_eq!(lemma.payload, Some(3));
}

#[test]
fn test_read_word_list_keeps_line_numbers() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, "\nkitap\n   \ngel\n").unwrap();

    let words = read_word_list(&path).unwrap();
    assert_eq!(words, vec![("kitap".to_string(), 1), ("gel".to_string(), 3)]);
}

#[test]
fn test_missing_word_list_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_word_list(temp_dir.path().join("missing.txt"));

    assert!(matches!(result, Err(LexitrieError::Io(_))));
}
