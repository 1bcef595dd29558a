//! Integration scenarios for the text processing pipeline.

use std::io::Write;

use lexstat::prelude::*;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn test_corpus_statistics_with_default_stop_words() -> Result<()> {
    let file = write_temp(
        "The quick brown fox jumps over the lazy dog.\n\
         The quick brown fox doesn't wait for the lazy dog.\n",
    );

    let mut processor = TextProcessor::new();
    processor.include_ngram(2);
    processor.include_ngram(3);
    processor.process_file(file.path(), true)?;

    assert_eq!(processor.documents_processed(), 1);
    assert_eq!(processor.num_words(), 19);
    assert_eq!(processor.num_unique_words(), 11);

    // "the" and "for" are stop words but still count as words.
    let words = processor.word_frequency(-1).to_vec();
    let count = |key: &str| words.iter().find(|(k, _)| k == key).map_or(0, |(_, c)| *c);
    assert_eq!(count("the"), 4);
    assert_eq!(count("quick"), 2);
    assert_eq!(count("for"), 1);
    assert_eq!(count("doesn't"), 1);

    // Stop words break the phrase windows on both lines.
    assert_eq!(processor.num_ngrams(2), 10);
    assert_eq!(processor.num_unique_ngrams(2), 7);
    assert_eq!(processor.num_ngrams(3), 6);
    assert_eq!(processor.num_unique_ngrams(3), 5);
    assert_eq!(
        processor.ngram_frequency(2, 1),
        [("brown fox".to_string(), 2)]
    );
    assert_eq!(
        processor.ngram_frequency(3, 1),
        [("quick brown fox".to_string(), 2)]
    );

    Ok(())
}

#[test]
fn test_process_file_failure_leaves_state_unchanged() {
    let mut processor = TextProcessor::new();
    processor.include_ngram(2);
    processor.process("seed words here", true);

    let before_words = processor.num_words();
    let before_docs = processor.documents_processed();

    let result = processor.process_file("definitely/not/a/file.txt", false);
    assert!(result.is_err());
    assert_eq!(processor.num_words(), before_words);
    assert_eq!(processor.documents_processed(), before_docs);
    assert_eq!(processor.num_ngrams(2), 2);
}

#[test]
fn test_append_across_files() -> Result<()> {
    let first = write_temp("alpha beta gamma");
    let second = write_temp("alpha delta");

    let mut processor = TextProcessor::with_stop_words(StopWordFilter::empty());
    processor.include_ngram(2);
    processor.process_file(first.path(), true)?;
    processor.process_file(second.path(), true)?;

    assert_eq!(processor.documents_processed(), 2);
    assert_eq!(processor.num_words(), 5);
    assert_eq!(processor.word_frequency(1), [("alpha".to_string(), 2)]);

    // Runs never cross document boundaries.
    assert_eq!(processor.num_ngrams(2), 3);
    let mut bigrams: Vec<String> = processor
        .ngram_frequency(2, -1)
        .iter()
        .map(|(k, _)| k.clone())
        .collect();
    bigrams.sort();
    assert_eq!(bigrams, ["alpha beta", "alpha delta", "beta gamma"]);

    Ok(())
}

#[test]
fn test_replacing_corpus_keeps_ngram_history() -> Result<()> {
    let first = write_temp("cat sat mat");
    let second = write_temp("dog ran far");

    let mut processor = TextProcessor::with_stop_words(StopWordFilter::empty());
    processor.include_ngram(2);
    processor.process_file(first.path(), true)?;
    processor.process_file(second.path(), false)?;

    // Word statistics describe only the second file.
    assert_eq!(processor.num_unique_words(), 3);
    assert_eq!(processor.word_frequency(-1).iter().filter(|(w, _)| w == "cat").count(), 0);

    // The bigram stores accumulated across both.
    assert_eq!(processor.num_ngrams(2), 4);

    Ok(())
}

#[test]
fn test_ranking_ties_break_alphabetically() {
    let mut processor = TextProcessor::with_stop_words(StopWordFilter::empty());
    processor.process("zebra yak zebra yak apple", true);

    assert_eq!(
        processor.word_frequency(-1),
        [
            ("yak".to_string(), 2),
            ("zebra".to_string(), 2),
            ("apple".to_string(), 1),
        ]
    );
}
