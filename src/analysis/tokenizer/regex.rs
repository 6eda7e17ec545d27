//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{NewsvoteError, Result};

/// Pattern for article tokens: a word with a one or two character
/// apostrophe suffix (`o'cl`, `y'all` style leftovers), or a plain word run.
pub const ARTICLE_TOKEN_PATTERN: &str = r"\w+'\w{1,2}|\w+";

/// A regex-based tokenizer that extracts every match of a pattern as a token.
///
/// A bare apostrophe never becomes part of a token unless the pattern says so.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the article token pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(ARTICLE_TOKEN_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| NewsvoteError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_short_apostrophe_suffix_is_kept() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "y'all rock"), vec!["y'al", "l", "rock"]);
        assert_eq!(texts(&tokenizer, "o'clock"), vec!["o'cl", "ock"]);
    }

    #[test]
    fn test_bare_apostrophe_is_dropped() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "' quoted '"), vec!["quoted"]);
        assert_eq!(texts(&tokenizer, "rock' n"), vec!["rock", "n"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "  !! ?").is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
