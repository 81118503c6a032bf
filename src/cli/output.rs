//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, WordTallyArgs};
use crate::error::Result;

/// Result structure for the count command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub document: String,
    pub stop_words: Option<String>,
    pub total_word_count: Option<u64>,
    pub distinct_words: usize,
    pub top_n: usize,
    pub page: usize,
    pub page_count: usize,
    pub rows: Vec<ReportRow>,
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub rank: usize,
    pub word: String,
    pub count: u64,
}

/// Result structure for the tokens command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub file: String,
    pub pattern: String,
    pub tokens: Vec<Token>,
}

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Render for a terminal.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;

    /// Render as CSV rows with a header line.
    fn write_csv(&self, out: &mut dyn Write) -> Result<()>;
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Report>(
    message: &str,
    result: &T,
    args: &WordTallyArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)
        }
        OutputFormat::Json => output_json(result, args, out),
        OutputFormat::Csv => result.write_csv(out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordTallyArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl Report for CountReport {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(total) = self.total_word_count {
            writeln!(out, "Total Words: {total}")?;
        }
        writeln!(
            out,
            "Top {} words (page {} of {}, {} distinct)",
            self.top_n, self.page, self.page_count, self.distinct_words
        )?;

        if self.rows.is_empty() {
            writeln!(out, "No words to show.")?;
            return Ok(());
        }

        let rank_width = self
            .rows
            .iter()
            .map(|r| r.rank.to_string().len())
            .max()
            .unwrap_or(1)
            .max(1);
        let word_width = self
            .rows
            .iter()
            .map(|r| r.word.len())
            .max()
            .unwrap_or(4)
            .max(4);

        writeln!(out)?;
        writeln!(
            out,
            "{:>rank_width$}  {:<word_width$}  Occurrence",
            "#", "Word"
        )?;
        writeln!(out, "{}", "─".repeat(rank_width + word_width + 14))?;
        for row in &self.rows {
            writeln!(
                out,
                "{:>rank_width$}  {:<word_width$}  {}",
                row.rank, row.word, row.count
            )?;
        }
        Ok(())
    }

    fn write_csv(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "rank,word,count")?;
        for row in &self.rows {
            writeln!(out, "{},{},{}", row.rank, csv_field(&row.word), row.count)?;
        }
        Ok(())
    }
}

impl Report for TokenReport {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "{} tokens in {} ({})",
            self.tokens.len(), self.file, self.pattern
        )?;
        for token in &self.tokens {
            writeln!(
                out,
                "{:>6}  {}..{}  {}",
                token.position, token.start_offset, token.end_offset, token.text
            )?;
        }
        Ok(())
    }

    fn write_csv(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "position,start,end,text")?;
        for token in &self.tokens {
            writeln!(
                out,
                "{},{},{},{}",
                token.position,
                token.start_offset,
                token.end_offset,
                csv_field(&token.text)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn report() -> CountReport {
        CountReport {
            document: "doc.txt".to_string(),
            stop_words: None,
            total_word_count: Some(10),
            distinct_words: 2,
            top_n: 2,
            page: 1,
            page_count: 1,
            rows: vec![
                ReportRow {
                    rank: 1,
                    word: "quick".to_string(),
                    count: 3,
                },
                ReportRow {
                    rank: 2,
                    word: ",odd".to_string(),
                    count: 1,
                },
            ],
        }
    }

    fn render(format: &str, report: &CountReport) -> String {
        let args = WordTallyArgs::parse_from(["wordtally", "-f", format, "count", "doc.txt"]);
        let mut out = Vec::new();
        output_result("Counted", report, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_output() {
        let text = render("human", &report());
        assert!(text.starts_with("Total Words: 10\nTop 2 words (page 1 of 1, 2 distinct)\n"));
        assert!(text.contains("quick"));
        assert!(text.contains("Occurrence"));
    }

    #[test]
    fn test_human_output_without_total() {
        let mut empty = report();
        empty.total_word_count = None;
        empty.rows.clear();

        let text = render("human", &empty);
        assert!(!text.contains("Total Words"));
        assert!(text.contains("No words to show."));
    }

    #[test]
    fn test_csv_output_quotes_fields() {
        let text = render("csv", &report());
        assert_eq!(text, "rank,word,count\n1,quick,3\n2,\",odd\",1\n");
    }

    #[test]
    fn test_json_output() {
        let text = render("json", &report());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total_word_count"], 10);
        assert_eq!(value["rows"][0]["word"], "quick");
        assert!(value["stop_words"].is_null());
    }

    #[test]
    fn test_token_report_csv() {
        let report = TokenReport {
            file: "a.txt".to_string(),
            pattern: "x".to_string(),
            tokens: vec![Token::with_offsets("don't", 0, 0, 5)],
        };
        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "position,start,end,text\n0,0,5,don't\n");
    }
}
