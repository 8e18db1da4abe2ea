//! Trial parser: text → block of pass/fail outcomes
//!
//! Accepts either a compact digit string (`1101100111`) or separated tokens
//! (`y n y`, `correct, wrong, correct`, `+ - +`).

use lazy_static::lazy_static;
use regex::Regex;
use crate::{CoachError, Result};

lazy_static! {
    /// Only 0/1, at least one digit
    static ref RE_COMPACT: Regex = Regex::new(r"^[01]+$").unwrap();

    /// Whitespace, commas or semicolons between tokens
    static ref RE_SEPARATOR: Regex = Regex::new(r"[\s,;]+").unwrap();

    static ref RE_CORRECT: Regex = Regex::new(
        r"(?i)^(1|y|yes|t|true|c|correct|pass|hit|\+)$"
    ).unwrap();

    static ref RE_INCORRECT: Regex = Regex::new(
        r"(?i)^(0|n|no|f|false|x|incorrect|wrong|fail|miss|-)$"
    ).unwrap();
}

/// Parser for textual trial blocks
#[derive(Debug, Default)]
pub struct TrialParser;

impl TrialParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse text into trial outcomes
    pub fn parse(&self, text: &str) -> Result<Vec<bool>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoachError::EmptyBlock);
        }

        if RE_COMPACT.is_match(text) {
            return Ok(text.chars().map(|c| c == '1').collect());
        }

        let trials = RE_SEPARATOR
            .split(text)
            .filter(|token| !token.is_empty())
            .map(parse_token)
            .collect::<Result<Vec<bool>>>()?;

        if trials.is_empty() {
            return Err(CoachError::EmptyBlock);
        }
        Ok(trials)
    }
}

fn parse_token(token: &str) -> Result<bool> {
    if RE_CORRECT.is_match(token) {
        Ok(true)
    } else if RE_INCORRECT.is_match(token) {
        Ok(false)
    } else {
        Err(CoachError::InvalidTrial { token: token.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_digits() {
        let parser = TrialParser::new();
        assert_eq!(parser.parse("1101").unwrap(), vec![true, true, false, true]);
    }

    #[test]
    fn test_word_tokens() {
        let parser = TrialParser::new();
        let parsed = parser.parse("correct, Wrong; YES  no").unwrap();
        assert_eq!(parsed, vec![true, false, true, false]);
    }

    #[test]
    fn test_symbol_tokens() {
        let parser = TrialParser::new();
        assert_eq!(parser.parse("+ - +").unwrap(), vec![true, false, true]);
    }

    #[test]
    fn test_empty_is_error() {
        let parser = TrialParser::new();
        assert!(matches!(parser.parse("   "), Err(CoachError::EmptyBlock)));
        assert!(matches!(parser.parse(",;,"), Err(CoachError::EmptyBlock)));
    }

    #[test]
    fn test_unknown_token_is_error() {
        let parser = TrialParser::new();
        match parser.parse("y n maybe") {
            Err(CoachError::InvalidTrial { token }) => assert_eq!(token, "maybe"),
            other => panic!("expected InvalidTrial, got {:?}", other),
        }
    }
}
