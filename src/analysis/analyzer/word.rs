//! Word analyzers used by the frequency pipeline.
//!
//! A [`WordAnalyzer`] is a [`PipelineAnalyzer`] made of a [`WordTokenizer`]
//! followed by a [`LowercaseFilter`]. One analyzer is built per input role,
//! so the legacy rule can keep its document and stop-word patterns apart.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::word::{WordRole, WordTokenizer};
use crate::config::TokenizerRule;
use crate::error::Result;

/// Tokenizes with a word rule and folds case.
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
    rule: TokenizerRule,
    role: WordRole,
}

impl WordAnalyzer {
    /// Create an analyzer for the given rule and role.
    pub fn new(rule: TokenizerRule, role: WordRole) -> Result<Self> {
        let tokenizer = Arc::new(WordTokenizer::new(rule, role)?);
        let name = match role {
            WordRole::Document => "word_document",
            WordRole::StopWords => "word_stop_words",
        };
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name(name);

        Ok(WordAnalyzer { inner, rule, role })
    }

    /// Analyzer for the document being counted.
    pub fn document(rule: TokenizerRule) -> Result<Self> {
        Self::new(rule, WordRole::Document)
    }

    /// Analyzer for a stop-word list.
    pub fn stop_words(rule: TokenizerRule) -> Result<Self> {
        Self::new(rule, WordRole::StopWords)
    }

    /// The rule this analyzer applies.
    pub fn rule(&self) -> TokenizerRule {
        self.rule
    }

    /// The input this analyzer is meant for.
    pub fn role(&self) -> WordRole {
        self.role
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
