//! Command line argument parsing for the Lexstat CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexstat - word and n-gram frequency statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "lexstat")]
#[command(about = "Word and n-gram frequency statistics for text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexstatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

impl LexstatArgs {
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
    /// Process files and print summary statistics plus ranked lists
    Analyze(AnalyzeArgs),

    /// Process files and print only the ranked top lists
    Top(TopArgs),
}

/// Corpus selection and processing options shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Text files to process
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// N-gram orders to track (repeatable)
    #[arg(short = 'n', long = "order", value_name = "ORDER", default_values_t = [2, 3])]
    pub orders: Vec<usize>,

    /// File with custom stop words, one per line (default: built-in AP89 list)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Disable stop-word filtering entirely
    #[arg(long, conflicts_with = "stop_words")]
    pub no_stop_words: bool,
}

/// Arguments for the `analyze` command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Maximum number of ranked words to print
    #[arg(long, value_name = "N", default_value = "64")]
    pub top_words: isize,

    /// Maximum number of ranked n-grams to print per order
    #[arg(long, value_name = "N", default_value = "32")]
    pub top_ngrams: isize,
}

/// Arguments for the `top` command
#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Maximum number of ranked words to print
    #[arg(long, value_name = "N", default_value = "64")]
    pub top_words: isize,

    /// Maximum number of ranked n-grams to print per order
    #[arg(long, value_name = "N", default_value = "32")]
    pub top_ngrams: isize,
}

/// Output formats available in the CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut args = LexstatArgs::parse_from(["lexstat", "analyze", "corpus.txt"]);
        assert_eq!(args.verbosity(), 1);

        args.verbose = 2;
        assert_eq!(args.verbosity(), 2);

        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_default_orders() {
        let args = LexstatArgs::parse_from(["lexstat", "analyze", "corpus.txt"]);
        let Command::Analyze(analyze) = args.command else {
            panic!("expected analyze command");
        };
        assert_eq!(analyze.corpus.orders, [2, 3]);
        assert_eq!(analyze.top_words, 64);
        assert_eq!(analyze.top_ngrams, 32);
    }

    #[test]
    fn test_repeatable_orders() {
        let args = LexstatArgs::parse_from(["lexstat", "top", "-n", "2", "-n", "4", "corpus.txt"]);
        let Command::Top(top) = args.command else {
            panic!("expected top command");
        };
        assert_eq!(top.corpus.orders, [2, 4]);
    }
}
