//! Word tokenizers for documents and stop-word lists.
//!
//! Two rule sets are available through [`TokenizerRule`]:
//!
//! - `Canonical`: a token is an ASCII letter followed by zero or more ASCII
//!   word characters (`[A-Za-z0-9_]`), optionally continued by apostrophe
//!   groups such as `don't` or `rock'n'roll`. Documents and stop-word lists
//!   share this rule.
//! - `Legacy`: a token is one leading character from `[A-Z,a-z]` (plus `'`
//!   for documents) followed by at least one ASCII word character. Single
//!   letters never match and a comma may start a token.
//!
//! Only ASCII letters start a token; other scripts are skipped.
//!
//! ```
//! use wordtally::analysis::tokenizer::{Tokenizer, WordRole, WordTokenizer};
//! use wordtally::config::TokenizerRule;
//!
//! let tokenizer = WordTokenizer::new(TokenizerRule::Canonical, WordRole::Document).unwrap();
//! let words: Vec<String> = tokenizer
//!     .tokenize("Don't stop, A-team!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, vec!["Don't", "stop", "A", "team"]);
//! ```

use super::Tokenizer;
use super::regex::RegexTokenizer;
use crate::analysis::token::TokenStream;
use crate::config::TokenizerRule;
use crate::error::Result;

/// Pattern shared by documents and stop-word lists under the canonical rule.
pub const CANONICAL_WORD_PATTERN: &str = r"[A-Za-z][A-Za-z0-9_]*(?:'[A-Za-z0-9_]+)*";

/// Historical document pattern.
pub const LEGACY_DOCUMENT_PATTERN: &str = r"[A-Z,a-z'][A-Za-z0-9_]+";

/// Historical stop-word pattern.
pub const LEGACY_STOP_WORD_PATTERN: &str = r"[A-Z,a-z][A-Za-z0-9_]+";

/// Which input a tokenizer is reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordRole {
    /// The document whose words are counted.
    Document,
    /// The list of words to suppress.
    StopWords,
}

impl TokenizerRule {
    /// The regex pattern this rule uses for the given input.
    pub fn pattern(&self, role: WordRole) -> &'static str {
        match (self, role) {
            (TokenizerRule::Canonical, _) => CANONICAL_WORD_PATTERN,
            (TokenizerRule::Legacy, WordRole::Document) => LEGACY_DOCUMENT_PATTERN,
            (TokenizerRule::Legacy, WordRole::StopWords) => LEGACY_STOP_WORD_PATTERN,
        }
    }
}

/// A tokenizer applying one [`TokenizerRule`] for one [`WordRole`].
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    inner: RegexTokenizer,
    rule: TokenizerRule,
    role: WordRole,
}

impl WordTokenizer {
    /// Create a tokenizer for the given rule and role.
    pub fn new(rule: TokenizerRule, role: WordRole) -> Result<Self> {
        Ok(WordTokenizer {
            inner: RegexTokenizer::new(rule.pattern(role))?,
            rule,
            role,
        })
    }

    /// The rule this tokenizer applies.
    pub fn rule(&self) -> TokenizerRule {
        self.rule
    }

    /// The input this tokenizer is meant for.
    pub fn role(&self) -> WordRole {
        self.role
    }

    /// The underlying regex pattern.
    pub fn pattern(&self) -> &str {
        self.inner.pattern()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        self.inner.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
