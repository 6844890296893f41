//! AFINN-style sentiment scoring over the plain-text projection.
//!
//! The score is normalized by the total token count (not just the matched
//! tokens), so a long neutral abstract with one enthusiastic word stays close
//! to zero. Zero tokens means "no opinion": the scorer returns `None` rather
//! than dividing by zero.

pub mod lexicon;

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

pub use lexicon::Lexicon;

lazy_static! {
    static ref NON_WORD_RE: Regex = Regex::new(r"\W").unwrap();
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    /// Summed word scores divided by total token count, rounded to 3 decimals
    pub score: f64,
    /// Matched words with positive scores, in order of first occurrence
    pub positive_words: IndexSet<String>,
    /// Matched words with negative scores, in order of first occurrence
    pub negative_words: IndexSet<String>,
}

/// Score a plain text against a lexicon.
///
/// Tokenizes on non-word boundaries, lowercases, sums the lexicon hits and
/// normalizes by the number of tokens. Returns `None` when the text contains
/// no tokens at all.
pub fn score(plain_text: &str, lexicon: &Lexicon) -> Option<SentimentResult> {
    let tokens: Vec<String> = NON_WORD_RE
        .split(plain_text)
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.to_lowercase())
        .collect();
    if tokens.is_empty() {
        return None;
    }

    let mut sum: i64 = 0;
    let mut positive_words = IndexSet::new();
    let mut negative_words = IndexSet::new();
    for token in &tokens {
        if let Some(word_score) = lexicon.score_of(token) {
            sum += i64::from(word_score);
            if word_score > 0 {
                positive_words.insert(token.clone());
            } else if word_score < 0 {
                negative_words.insert(token.clone());
            }
        }
    }

    let raw = sum as f64 / tokens.len() as f64;
    Some(SentimentResult {
        score: (raw * 1000.0).round() / 1000.0,
        positive_words,
        negative_words,
    })
}

/// Wrap every lexicon word in the (original-cased) text with a `<span>`
/// carrying a sign class and the word's signed effect, for host-side
/// highlighting.
pub fn annotate(text: &str, lexicon: &Lexicon) -> String {
    WORD_RE
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            match lexicon.score_of(&word.to_lowercase()) {
                Some(effect) if effect != 0 => {
                    let class = if effect > 0 {
                        "sentiment-positive"
                    } else {
                        "sentiment-negative"
                    };
                    format!(
                        r#"<span class="{}" title="{:+}">{}</span>"#,
                        class, effect, word
                    )
                }
                _ => word.to_string(),
            }
        })
        .into_owned()
}
