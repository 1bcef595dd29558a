//! Command implementations for the Lexstat CLI.

use std::fs;

use crate::analysis::stop_words::StopWordFilter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexstatError, Result};
use crate::processor::TextProcessor;

/// Execute a CLI command.
pub fn execute_command(args: LexstatArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Top(top_args) => top(top_args.clone(), &args),
    }
}

/// Process files and print the full statistics report.
fn analyze(args: AnalyzeArgs, cli_args: &LexstatArgs) -> Result<()> {
    let mut processor = build_processor(&args.corpus)?;
    ingest(&mut processor, &args.corpus, cli_args)?;

    let summary = corpus_summary(&processor);
    let (top_words, top_ngrams) = ranked_lists(&mut processor, args.top_words, args.top_ngrams);

    output_report(
        &CorpusReport {
            summary: Some(summary),
            top_words,
            top_ngrams,
        },
        cli_args,
    )
}

/// Process files and print only the ranked lists.
fn top(args: TopArgs, cli_args: &LexstatArgs) -> Result<()> {
    let mut processor = build_processor(&args.corpus)?;
    ingest(&mut processor, &args.corpus, cli_args)?;

    let (top_words, top_ngrams) = ranked_lists(&mut processor, args.top_words, args.top_ngrams);

    output_report(
        &CorpusReport {
            summary: None,
            top_words,
            top_ngrams,
        },
        cli_args,
    )
}

/// Build a processor from the corpus options.
fn build_processor(corpus: &CorpusArgs) -> Result<TextProcessor> {
    let filter = if corpus.no_stop_words {
        StopWordFilter::empty()
    } else if let Some(path) = &corpus.stop_words {
        let text = fs::read_to_string(path)?;
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        if words.is_empty() {
            return Err(LexstatError::analysis(format!(
                "stop word file {} contains no words",
                path.display()
            )));
        }
        StopWordFilter::from_words(words)
    } else {
        StopWordFilter::new()
    };

    let mut processor = TextProcessor::with_stop_words(filter);
    for &order in &corpus.orders {
        processor.include_ngram(order);
    }
    Ok(processor)
}

/// Feed every input file to the processor.
///
/// Unreadable files are reported on stderr and skipped; only when no file
/// could be processed does the command fail.
fn ingest(processor: &mut TextProcessor, corpus: &CorpusArgs, cli_args: &LexstatArgs) -> Result<()> {
    let mut processed = 0usize;
    for file in &corpus.files {
        if cli_args.verbosity() > 1 {
            println!("Processing: {}", file.display());
        }
        match processor.process_file(file, true) {
            Ok(()) => processed += 1,
            Err(e) => {
                if cli_args.verbosity() > 0 {
                    eprintln!("warning: cannot process {}: {e}", file.display());
                }
            }
        }
    }

    if processed == 0 {
        return Err(LexstatError::invalid_operation(
            "no input file could be processed",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;

    fn corpus_args(files: Vec<PathBuf>) -> CorpusArgs {
        CorpusArgs {
            files,
            orders: vec![2, 3],
            stop_words: None,
            no_stop_words: false,
        }
    }

    #[test]
    fn test_build_processor_tracks_requested_orders() {
        let mut corpus = corpus_args(vec![]);
        corpus.orders = vec![2, 4, 1];

        let processor = build_processor(&corpus).unwrap();
        // Order 1 is silently ignored.
        assert_eq!(processor.tracked_orders(), [2, 4]);
    }

    #[test]
    fn test_build_processor_custom_stop_words() {
        let mut stop_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(stop_file, "The\n  on  \n").unwrap();

        let mut corpus = corpus_args(vec![]);
        corpus.stop_words = Some(stop_file.path().to_path_buf());

        let mut processor = build_processor(&corpus).unwrap();
        processor.process("the cat sat on the mat", true);
        assert_eq!(processor.ngram_frequency(2, -1).len(), 1);
    }

    #[test]
    fn test_build_processor_rejects_empty_stop_word_file() {
        let stop_file = tempfile::NamedTempFile::new().unwrap();

        let mut corpus = corpus_args(vec![]);
        corpus.stop_words = Some(stop_file.path().to_path_buf());

        assert!(build_processor(&corpus).is_err());
    }

    #[test]
    fn test_ingest_fails_when_nothing_is_readable() {
        let cli_args = LexstatArgs::parse_from(["lexstat", "-q", "analyze", "missing.txt"]);
        let corpus = corpus_args(vec![PathBuf::from("definitely/not/a/file.txt")]);

        let mut processor = build_processor(&corpus).unwrap();
        assert!(ingest(&mut processor, &corpus, &cli_args).is_err());
        assert_eq!(processor.documents_processed(), 0);
    }

    #[test]
    fn test_ingest_skips_unreadable_files() {
        let mut data = tempfile::NamedTempFile::new().unwrap();
        writeln!(data, "some words here").unwrap();

        let cli_args = LexstatArgs::parse_from(["lexstat", "-q", "analyze", "corpus.txt"]);
        let corpus = corpus_args(vec![
            PathBuf::from("definitely/not/a/file.txt"),
            data.path().to_path_buf(),
        ]);

        let mut processor = build_processor(&corpus).unwrap();
        ingest(&mut processor, &corpus, &cli_args).unwrap();
        assert_eq!(processor.documents_processed(), 1);
        assert_eq!(processor.num_words(), 3);
    }
}
