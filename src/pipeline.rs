//! The formatting pipeline.
//!
//! Composes the core rewriters and checkers in their required order and
//! collects diagnostics along the way. Two views of the text are threaded
//! through: the rich (markup-bearing) text that accumulates transforms, and
//! a plain projection with tags stripped that feeds the measurement checks.
//! Checks only ever read the plain view.

use serde::{Deserialize, Serialize};

use crate::core::{chars, checks, comments, prefix, tex, whitespace};
use crate::core::checks::LengthBucket;
use crate::sentiment::{self, Lexicon, SentimentResult};
use crate::utils::diagnostics::{ids, DiagnosticSet, Severity};

/// Per-run formatting options.
///
/// Owned by the invoking context rather than being process-wide state:
/// toggling paragraph flattening affects the run it is passed into, nothing
/// else.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Collapse all paragraphs into one flat block instead of wrapping each
    /// in `<p>` tags.
    #[serde(default)]
    pub flatten_paragraphs: bool,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize)]
pub struct FormatOutcome {
    /// Cleaned text, renderable as a constrained HTML subset (`<p>`,
    /// `<br />`, and the named entities the rewriters emit)
    pub html: String,
    /// Tag-stripped projection of `html`
    pub plain: String,
    /// Approximate word count the length diagnostics were based on
    pub word_count: usize,
    /// Advisory findings, at most one per id, rebuilt on every run
    pub diagnostics: DiagnosticSet,
    /// Sentiment score, absent when the text has no tokens
    pub sentiment: Option<SentimentResult>,
}

/// Reusable pipeline instance: options plus the sentiment lexicon.
#[derive(Debug, Clone)]
pub struct Formatter {
    options: FormatOptions,
    lexicon: Lexicon,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl Formatter {
    /// Formatter with the embedded default lexicon.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            lexicon: Lexicon::afinn(),
        }
    }

    /// Formatter with a caller-supplied lexicon.
    pub fn with_lexicon(options: FormatOptions, lexicon: Lexicon) -> Self {
        Self { options, lexicon }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Run the full pipeline over one input.
    pub fn format(&self, input: &str) -> FormatOutcome {
        let mut diagnostics = DiagnosticSet::new();

        // Character normalization runs first: once angle brackets are
        // escaped, every later `<...>` in the working text is ours.
        let rich = chars::expand_ligatures(input);
        let rich = chars::strip_non_printable(&rich);
        let rich = chars::escape_angle_brackets(&rich);

        let (rich, comments_removed) = comments::remove_comments(&rich);
        if comments_removed {
            diagnostics.assert(
                ids::COMMENTED_LINES,
                Severity::Info,
                "Removed some LaTeX comments from your abstract.",
            );
        }

        // Checked before the line breaks are collapsed away.
        if checks::has_multiple_paragraphs(&rich) {
            diagnostics.assert(
                ids::MULTIPLE_PARAGRAPHS,
                Severity::Warning,
                "I see multiple paragraphs, or a linebreak. Most abstracts have just one paragraph!",
            );
        }

        let mut rich = whitespace::normalize(&rich, self.options.flatten_paragraphs);
        let mut plain = chars::strip_html_tags(&rich);

        // Gate on the plain projection: the rich text may hide the marker
        // behind a leading paragraph tag.
        if prefix::starts_with_abstract(&plain) {
            rich = prefix::strip_prefix(&rich);
            plain = chars::strip_html_tags(&rich);
            diagnostics.assert(
                ids::ABSTRACT_PREFIX,
                Severity::Warning,
                "Your abstract begins with the word abstract. I removed it for you.",
            );
        }

        let word_count = checks::word_count(&plain);
        self.check_length(word_count, &mut diagnostics);

        if !checks::ends_correctly(&plain, word_count) {
            diagnostics.assert(
                ids::PARAGRAPH_END,
                Severity::Danger,
                "Your last sentence does not end in a fullstop, question or exclamation mark!",
            );
        }

        if checks::has_stray_question_mark(&plain, word_count) {
            diagnostics.assert(
                ids::STRAY_QUESTION_MARK,
                Severity::Warning,
                "There is a question mark that does not end a sentence. Is it a leftover?",
            );
        }

        if checks::has_references(&plain) {
            diagnostics.assert(
                ids::REFERENCES,
                Severity::Warning,
                "Your abstract contains references. It should not do that.",
            );
        }

        let math = tex::rewrite_math(&rich);
        if math.complex_remaining {
            diagnostics.assert(
                ids::TEX_MATH,
                Severity::Danger,
                "Contains complex TeX math. Is the abstract the right place for it?",
            );
        } else if math.exponent_inlined {
            diagnostics.assert(
                ids::TEX_MATH,
                Severity::Info,
                "Inlined TeX math with an exponent literally. Check that it still reads well.",
            );
        }

        let (html, styling_changed) = tex::rewrite_syntax(&math.text);
        if styling_changed {
            diagnostics.assert(
                ids::TEX_SYNTAX,
                Severity::Info,
                "I removed fancy LaTeX styling. Is the abstract the right place for it?",
            );
        }

        // Sentiment reads the same plain view as the checks: the entity
        // names the rewriters emit (ldquo, mdash) are not tokens.
        let sentiment = sentiment::score(&plain, &self.lexicon);
        let plain = chars::strip_html_tags(&html);
        match &sentiment {
            Some(result) if result.score < 0.0 => {
                diagnostics.assert(
                    ids::SENTIMENT,
                    Severity::Danger,
                    format!(
                        "Your sentiment score is {}. A score below 0 might convey negative connotation.",
                        result.score
                    ),
                );
            }
            Some(result) => {
                diagnostics.assert(
                    ids::SENTIMENT,
                    Severity::Info,
                    format!("Your sentiment score is {}. Well done!", result.score),
                );
            }
            // Zero tokens: no opinion, no diagnostic.
            None => {}
        }

        FormatOutcome {
            html,
            plain,
            word_count,
            diagnostics,
            sentiment,
        }
    }

    fn check_length(&self, word_count: usize, diagnostics: &mut DiagnosticSet) {
        match checks::length_bucket(word_count) {
            LengthBucket::TooShort | LengthBucket::Normal => {}
            LengthBucket::Short => diagnostics.assert(
                ids::LENGTH,
                Severity::Warning,
                format!(
                    "Your abstract has fewer than 100 words: {} words is often considered very short.",
                    word_count
                ),
            ),
            LengthBucket::Long => diagnostics.assert(
                ids::LENGTH,
                Severity::Warning,
                format!(
                    "Your abstract exceeds 200 words: {} words is often considered rather long.",
                    word_count
                ),
            ),
            LengthBucket::VeryLong => diagnostics.assert(
                ids::LENGTH,
                Severity::Danger,
                format!(
                    "Your text exceeds 250 words: {} words is often considered too long for an article.",
                    word_count
                ),
            ),
            LengthBucket::TooLong => diagnostics.assert(
                ids::LENGTH,
                Severity::Danger,
                format!(
                    "Your text exceeds 500 words: {} words is generally considered too long.",
                    word_count
                ),
            ),
        }
    }
}

/// Run the pipeline with default options and the embedded lexicon.
pub fn format_abstract(input: &str) -> FormatOutcome {
    Formatter::default().format(input)
}
