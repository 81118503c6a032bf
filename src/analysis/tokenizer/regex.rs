//! Pattern tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, WordTallyError};

/// Emits every non-overlapping, leftmost-first match of a pattern as a token.
///
/// The compiled pattern is shared, so clones are cheap.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    regex: Arc<Regex>,
}

impl RegexTokenizer {
    /// Compile `pattern` into a tokenizer.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            WordTallyError::analysis(format!("Invalid tokenizer pattern {pattern:?}: {e}"))
        })?;
        Ok(RegexTokenizer {
            regex: Arc::new(regex),
        })
    }

    /// The source of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(Box::new(
            self.regex
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| Token::from_match(position, mat)),
        ))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, text: &str) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .unwrap()
            .map(Token::into_text)
            .collect()
    }

    #[test]
    fn test_matches_become_tokens() {
        let tokenizer = RegexTokenizer::new(r"[0-9]+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("a1 b22 c333").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::with_offsets("22", 1, 4, 6));
        assert_eq!(tokenizer.pattern(), "[0-9]+");
    }

    #[test]
    fn test_leftmost_first_without_overlap() {
        let tokenizer = RegexTokenizer::new(r"ab|abc|c").unwrap();
        assert_eq!(texts(&tokenizer, "abc"), vec!["ab", "c"]);
    }

    #[test]
    fn test_no_matches() {
        let tokenizer = RegexTokenizer::new(r"[a-z]+").unwrap();
        assert!(texts(&tokenizer, "123 !!").is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::new("(unclosed").unwrap_err();
        assert!(matches!(err, WordTallyError::Analysis(_)));
    }

    #[test]
    fn test_tokenizing_twice_gives_the_same_stream() {
        let tokenizer = RegexTokenizer::new(r"\w+").unwrap();
        assert_eq!(texts(&tokenizer, "one two"), texts(&tokenizer, "one two"));
        assert_eq!(tokenizer.name(), "regex");
    }
}
