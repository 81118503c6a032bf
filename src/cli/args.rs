//! Command line argument parsing for the wordtally CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::TokenizerRule;
use crate::view::{SortColumn, SortDirection};

/// wordtally - count the words of a document, minus its stop words
#[derive(Parser, Debug, Clone)]
#[command(name = "wordtally")]
#[command(about = "Rank the words of a text document, excluding stop words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordTallyArgs {
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

impl WordTallyArgs {
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
    /// Count and rank the words of a document
    Count(CountArgs),

    /// Print the tokens read from a file
    Tokens(TokensArgs),
}

/// Options shared by every command that tokenizes text
#[derive(Parser, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDTALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Word pattern to use (overrides the configuration file)
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerChoice>,
}

/// Arguments for counting a document
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// Document to analyze
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Stop-word list whose words are never counted
    #[arg(short, long, value_name = "STOP_WORDS")]
    pub stop_words: Option<PathBuf>,

    /// Number of top words to show (clamped to the number of distinct words)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Page to show (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Rows per page (overrides the configuration file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show every row of the top N instead of one page
    #[arg(long, conflicts_with = "page")]
    pub all: bool,

    /// Re-sort the shown rows by this column
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort direction (defaults to asc for words, desc for counts)
    #[arg(long, requires = "sort")]
    pub order: Option<SortOrder>,

    /// Report the plain token count instead of the compatible total
    #[arg(long)]
    pub exact_total: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments for printing tokens
#[derive(Parser, Debug, Clone)]
pub struct TokensArgs {
    /// File to tokenize
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Tokenize the file as a stop-word list
    #[arg(long)]
    pub stop_words: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

/// Columns available for re-sorting
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort by word
    Word,
    /// Sort by occurrence count
    Count,
}

impl SortField {
    /// The direction used when `--order` is not given.
    pub fn default_order(self) -> SortOrder {
        match self {
            SortField::Word => SortOrder::Asc,
            SortField::Count => SortOrder::Desc,
        }
    }
}

impl From<SortField> for SortColumn {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Word => SortColumn::Word,
            SortField::Count => SortColumn::Count,
        }
    }
}

/// Sort directions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        }
    }
}

/// Word patterns selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerChoice {
    /// One shared rule with internal apostrophes
    Canonical,
    /// The historical document/stop-word patterns
    Legacy,
}

impl From<TokenizerChoice> for TokenizerRule {
    fn from(choice: TokenizerChoice) -> Self {
        match choice {
            TokenizerChoice::Canonical => TokenizerRule::Canonical,
            TokenizerChoice::Legacy => TokenizerRule::Legacy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_args() {
        let args = WordTallyArgs::parse_from([
            "wordtally",
            "-vv",
            "count",
            "doc.txt",
            "--stop-words",
            "stop.txt",
            "-n",
            "25",
            "--sort",
            "word",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Count(count) => {
                assert_eq!(count.document, PathBuf::from("doc.txt"));
                assert_eq!(count.stop_words, Some(PathBuf::from("stop.txt")));
                assert_eq!(count.top, Some(25));
                assert_eq!(count.page, 1);
                assert_eq!(count.sort, Some(SortField::Word));
                assert_eq!(count.order, None);
                assert!(!count.exact_total);
            }
            _ => panic!("Expected count command"),
        }
    }

    #[test]
    fn test_negative_top_is_accepted() {
        let args = WordTallyArgs::parse_from(["wordtally", "count", "doc.txt", "-n", "-4"]);
        match args.command {
            Command::Count(count) => assert_eq!(count.top, Some(-4)),
            _ => panic!("Expected count command"),
        }
    }

    #[test]
    fn test_tokens_args() {
        let args = WordTallyArgs::parse_from([
            "wordtally",
            "-q",
            "-f",
            "json",
            "tokens",
            "stop.txt",
            "--stop-words",
            "--tokenizer",
            "legacy",
        ]);

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Tokens(tokens) => {
                assert!(tokens.stop_words);
                assert_eq!(tokens.analysis.tokenizer, Some(TokenizerChoice::Legacy));
            }
            _ => panic!("Expected tokens command"),
        }
    }

    #[test]
    fn test_order_requires_sort() {
        let result =
            WordTallyArgs::try_parse_from(["wordtally", "count", "doc.txt", "--order", "asc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_orders() {
        assert_eq!(SortField::Word.default_order(), SortOrder::Asc);
        assert_eq!(SortField::Count.default_order(), SortOrder::Desc);
    }
}
