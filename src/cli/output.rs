//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexstatArgs, OutputFormat};
use crate::error::Result;
use crate::frequency::FrequencyPair;
use crate::processor::TextProcessor;

/// Corpus-wide summary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub documents_processed: u64,
    pub total_words: i64,
    pub unique_words: usize,
    pub ngrams: Vec<NgramSummary>,
}

/// Summary statistics for one n-gram order.
#[derive(Debug, Serialize, Deserialize)]
pub struct NgramSummary {
    pub order: usize,
    pub total: i64,
    pub unique: usize,
}

/// A ranked list of n-grams for one order.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedNgrams {
    pub order: usize,
    pub entries: Vec<FrequencyPair>,
}

/// Full report produced by the `analyze` and `top` commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Present for `analyze`, omitted for `top`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CorpusSummary>,
    pub top_words: Vec<FrequencyPair>,
    pub top_ngrams: Vec<RankedNgrams>,
}

/// Build a summary from the processor's current statistics.
pub fn corpus_summary(processor: &TextProcessor) -> CorpusSummary {
    CorpusSummary {
        documents_processed: processor.documents_processed(),
        total_words: processor.num_words(),
        unique_words: processor.num_unique_words(),
        ngrams: processor
            .tracked_orders()
            .into_iter()
            .map(|order| NgramSummary {
                order,
                total: processor.num_ngrams(order),
                unique: processor.num_unique_ngrams(order),
            })
            .collect(),
    }
}

/// Collect the ranked lists from the processor.
pub fn ranked_lists(
    processor: &mut TextProcessor,
    top_words: isize,
    top_ngrams: isize,
) -> (Vec<FrequencyPair>, Vec<RankedNgrams>) {
    let words = processor.word_frequency(top_words).to_vec();
    let ngrams = processor
        .tracked_orders()
        .into_iter()
        .map(|order| RankedNgrams {
            order,
            entries: processor.ngram_frequency(order, top_ngrams).to_vec(),
        })
        .collect();
    (words, ngrams)
}

/// Output a report in the format selected on the command line.
pub fn output_report(report: &CorpusReport, args: &LexstatArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Human-readable name for an n-gram order.
fn order_name(order: usize) -> String {
    match order {
        2 => "bigrams".to_string(),
        3 => "trigrams".to_string(),
        n => format!("{n}-grams"),
    }
}

fn output_human(report: &CorpusReport) -> Result<()> {
    if let Some(summary) = &report.summary {
        println!("Number of valid documents: {}", summary.documents_processed);
        println!("Number of words: {}", summary.total_words);
        println!("Number of unique words: {}", summary.unique_words);
        for ngrams in &summary.ngrams {
            let name = order_name(ngrams.order);
            println!("Number of \"interesting\" {name}: {}", ngrams.total);
            println!("Number of unique \"interesting\" {name}: {}", ngrams.unique);
        }
        println!();
    }

    println!("Top {} words:", report.top_words.len());
    for (word, count) in &report.top_words {
        println!("{count} {word}");
    }

    for ranked in &report.top_ngrams {
        let name = order_name(ranked.order);
        println!();
        println!("Top {} interesting {name}:", ranked.entries.len());
        for (phrase, count) in &ranked.entries {
            println!("{count} {phrase}");
        }
    }

    Ok(())
}

fn output_json(report: &CorpusReport, args: &LexstatArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{json}");
    Ok(())
}
