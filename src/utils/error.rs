//! Error handling for lexicon loading
//!
//! The formatting pipeline itself is total over the string domain and never
//! fails; malformed input is reported through diagnostics instead. The only
//! fallible surface is loading a sentiment lexicon from disk.

use std::fmt;

/// Lexicon loading error type
#[derive(Debug)]
pub enum LexiconError {
    /// IO error (for file operations)
    IoError { message: String },
    /// A line/record that could not be parsed as `word<TAB>score`
    ParseError {
        message: String,
        line: Option<u64>,
    },
    /// A score outside the expected [-5, 5] range
    ScoreOutOfRange { word: String, score: i64 },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            LexiconError::ParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            LexiconError::ScoreOutOfRange { word, score } => {
                write!(f, "Score {} for '{}' is outside [-5, 5]", score, word)
            }
        }
    }
}

impl std::error::Error for LexiconError {}

impl From<std::io::Error> for LexiconError {
    fn from(err: std::io::Error) -> Self {
        LexiconError::IoError {
            message: err.to_string(),
        }
    }
}

// Convenience constructors
impl LexiconError {
    pub fn parse(message: impl Into<String>) -> Self {
        LexiconError::ParseError {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: u64) -> Self {
        LexiconError::ParseError {
            message: message.into(),
            line: Some(line),
        }
    }
}

/// Result type for lexicon loading
pub type LexiconResult<T> = Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = LexiconError::parse_at("expected two fields", 12);
        let msg = err.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("expected two fields"));
    }

    #[test]
    fn test_score_out_of_range_display() {
        let err = LexiconError::ScoreOutOfRange {
            word: "superb".to_string(),
            score: 9,
        };
        assert!(err.to_string().contains("superb"));
        assert!(err.to_string().contains("[-5, 5]"));
    }
}
