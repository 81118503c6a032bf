//! Command implementations for the wordtally CLI.

use std::io::{self, Write};

use log::debug;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::analysis::tokenizer::word::WordRole;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AnalysisConfig, TotalCountMode};
use crate::error::{Result, WordTallyError};
use crate::frequency::WordPipeline;
use crate::source::{FileSource, TextSource};
use crate::view::ResultsView;

/// Execute a CLI command, writing its result to stdout.
pub async fn execute_command(args: WordTallyArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Execute a CLI command, writing its result to `out`.
pub async fn run_command(args: &WordTallyArgs, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Count(count_args) => count_document(count_args, args, out).await,
        Command::Tokens(tokens_args) => print_tokens(tokens_args, args, out).await,
    }
}

/// Build the analysis configuration from the config file and CLI overrides.
pub fn resolve_config(analysis: &AnalysisArgs) -> Result<AnalysisConfig> {
    let mut config = match &analysis.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            AnalysisConfig::from_json_file(path)?
        }
        None => AnalysisConfig::default(),
    };

    if let Some(choice) = analysis.tokenizer {
        config.tokenizer = choice.into();
    }
    Ok(config)
}

/// Count and rank a document.
async fn count_document(
    args: &CountArgs,
    cli_args: &WordTallyArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let mut config = resolve_config(&args.analysis)?;
    if args.exact_total {
        config.total_count = TotalCountMode::Exact;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    let pipeline = WordPipeline::new(config)?;
    let document = FileSource::new(&args.document);
    let stop_words = args.stop_words.as_ref().map(FileSource::new);

    let processed = pipeline.run(&document, stop_words.as_ref()).await?;

    let mut view = ResultsView::from_config(&processed.sorted_entries, pipeline.config());
    if let Some(top) = args.top {
        view = view.with_top_n(top);
    }
    if let Some(field) = args.sort {
        let order = args.order.unwrap_or(field.default_order());
        view = view.with_sort(field.into(), order.into());
    }
    if args.all {
        let top_n = view.top_n();
        view = view.with_page_size(top_n);
    }

    if args.page == 0 && !args.all {
        return Err(WordTallyError::invalid_argument("pages are numbered from 1"));
    }
    let page_index = if args.all { 0 } else { args.page - 1 };
    let page = view.page(page_index).ok_or_else(|| {
        WordTallyError::invalid_argument(format!(
            "page {} does not exist (last page is {})",
            args.page,
            view.page_count()
        ))
    })?;

    let rows = page
        .rows
        .iter()
        .enumerate()
        .map(|(i, entry)| ReportRow {
            rank: page.first_row + i,
            word: entry.word.clone(),
            count: entry.count,
        })
        .collect();

    let report = CountReport {
        document: document.describe(),
        stop_words: stop_words.as_ref().map(|s| s.describe()),
        total_word_count: processed.total_word_count,
        distinct_words: processed.distinct_word_count(),
        top_n: view.top_n(),
        page: page.index + 1,
        page_count: page.page_count,
        rows,
    };

    output_result("Document analyzed", &report, cli_args, out)
}

/// Print the token stream of a file.
async fn print_tokens(
    args: &TokensArgs,
    cli_args: &WordTallyArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let config = resolve_config(&args.analysis)?;
    let role = if args.stop_words {
        WordRole::StopWords
    } else {
        WordRole::Document
    };
    let analyzer = WordAnalyzer::new(config.tokenizer, role)?;

    let source = FileSource::new(&args.file);
    let text = source.read_text().await?;
    let tokens = analyzer.analyze(&text)?.collect();

    let report = TokenReport {
        file: source.describe(),
        pattern: config.tokenizer.pattern(role).to_string(),
        tokens,
    };

    output_result("Tokens read", &report, cli_args, out)
}
