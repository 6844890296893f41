//! Structural checks over the plain-text projection.
//!
//! Pure predicates and classifiers; none of them rewrites anything. They all
//! read the tag-stripped plain text, so markup introduced by earlier pipeline
//! stages never skews the measurements.

use lazy_static::lazy_static;
use regex::Regex;

/// Word counts at or below this are treated as toy input: the length,
/// ending and question-mark checks stay quiet for them.
pub const LEAST_SENSIBLE_WORDS: usize = 10;

lazy_static! {
    static ref FORMAT_CONTROL_RE: Regex =
        Regex::new("[\u{000C}\t\u{000B}\u{00A0}\u{2028}\u{2029}]").unwrap();
    static ref DOUBLE_WS_RE: Regex = Regex::new(r"\s{2,}\S").unwrap();
    static ref WORD_BOUNDARY_RE: Regex = Regex::new(r"\b").unwrap();
    static ref STRAY_QUESTION_RE: Regex = Regex::new(r"[A-Za-z]\?[a-z]| \?").unwrap();
    static ref REFERENCE_RE: Regex = Regex::new(r"\[(\w*\d\w*)(, \w*\d\w*)*\]").unwrap();
}

/// True if the text has more than one paragraph or a forced line break.
///
/// Ordinary spaces and format-control characters are discarded first; what
/// remains is multi-paragraph if two consecutive whitespace characters are
/// still followed by content, or if a literal TeX `\\` break is present.
pub fn has_multiple_paragraphs(text: &str) -> bool {
    let condensed = text.replace(' ', "");
    let condensed = FORMAT_CONTROL_RE.replace_all(&condensed, "");
    DOUBLE_WS_RE.is_match(&condensed) || condensed.contains("\\\\")
}

/// Approximate word count: word-boundary matches divided by two.
///
/// Every word contributes a boundary at its start and its end, which makes
/// the count robust to the exact tokenizer. Punctuation-adjacent tokens can
/// shift it slightly; the length thresholds are calibrated against exactly
/// this behavior, so it is kept as-is.
pub fn word_count(text: &str) -> usize {
    WORD_BOUNDARY_RE.find_iter(text).count() / 2
}

/// Length classification of an abstract by word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBucket {
    /// At most [`LEAST_SENSIBLE_WORDS`]: toy input, no length diagnostic
    TooShort,
    /// Fewer than 100 words
    Short,
    /// 100 to 200 words
    Normal,
    /// More than 200, up to 250 words
    Long,
    /// More than 250, up to 500 words
    VeryLong,
    /// More than 500 words
    TooLong,
}

/// Classify a word count into its [`LengthBucket`].
pub fn length_bucket(count: usize) -> LengthBucket {
    if count <= LEAST_SENSIBLE_WORDS {
        LengthBucket::TooShort
    } else if count < 100 {
        LengthBucket::Short
    } else if count <= 200 {
        LengthBucket::Normal
    } else if count <= 250 {
        LengthBucket::Long
    } else if count <= 500 {
        LengthBucket::VeryLong
    } else {
        LengthBucket::TooLong
    }
}

/// True if the text ends in `.`, `?` or `!`, or is too short to judge.
pub fn ends_correctly(text: &str, word_count: usize) -> bool {
    word_count <= LEAST_SENSIBLE_WORDS || text.ends_with(['.', '?', '!'])
}

/// True if a `?` appears mid-sentence (letter`?`lowercase, or a space
/// directly before the `?`). Quiet for toy-length input.
pub fn has_stray_question_mark(text: &str, word_count: usize) -> bool {
    word_count > LEAST_SENSIBLE_WORDS && STRAY_QUESTION_RE.is_match(text)
}

/// True if a bracketed citation like `[5]`, `[wmyer44]` or `[32, 33, 31]`
/// is present. Every comma-separated entry must contain a digit, which rules
/// out plain bracketed asides like `[a]` or `[...]`.
pub fn has_references(text: &str) -> bool {
    REFERENCE_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_paragraph_inputs() {
        assert!(!has_multiple_paragraphs("This consists of one paragraph."));
        assert!(!has_multiple_paragraphs("This consists of   one paragraph."));
        assert!(!has_multiple_paragraphs("This consists of \n one paragraph."));
        assert!(!has_multiple_paragraphs("This consists of \n    one paragraph."));
    }

    #[test]
    fn multi_paragraph_inputs() {
        assert!(has_multiple_paragraphs("This consists of not\n\r one paragraph."));
        assert!(has_multiple_paragraphs("This consists of not\n  \r one paragraph."));
        assert!(has_multiple_paragraphs("This consists of a forced \\\\ paragraph."));
    }

    #[test]
    fn counts_words_by_boundary_pairs() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("one, two; three."), 3);
    }

    #[test]
    fn buckets_follow_thresholds() {
        assert_eq!(length_bucket(0), LengthBucket::TooShort);
        assert_eq!(length_bucket(10), LengthBucket::TooShort);
        assert_eq!(length_bucket(11), LengthBucket::Short);
        assert_eq!(length_bucket(99), LengthBucket::Short);
        assert_eq!(length_bucket(100), LengthBucket::Normal);
        assert_eq!(length_bucket(200), LengthBucket::Normal);
        assert_eq!(length_bucket(201), LengthBucket::Long);
        assert_eq!(length_bucket(250), LengthBucket::Long);
        assert_eq!(length_bucket(251), LengthBucket::VeryLong);
        assert_eq!(length_bucket(500), LengthBucket::VeryLong);
        assert_eq!(length_bucket(501), LengthBucket::TooLong);
    }

    #[test]
    fn endings_accepted() {
        assert!(ends_correctly("This ends properly or.", 20));
        assert!(ends_correctly("This ends properly or!!", 20));
        assert!(ends_correctly("This ends properly or!?", 20));
        assert!(ends_correctly("Does it end properly?", 20));
    }

    #[test]
    fn missing_terminal_punctuation() {
        assert!(!ends_correctly("This ends properly not", 20));
    }

    #[test]
    fn short_text_passes_ending_check() {
        assert!(ends_correctly("too short to judge", 3));
        assert!(ends_correctly("", 0));
    }

    #[test]
    fn stray_question_marks() {
        assert!(has_stray_question_mark("why?is this here", 20));
        assert!(has_stray_question_mark("spaced ? question", 20));
        assert!(!has_stray_question_mark("Is this fine? Yes.", 20));
        assert!(!has_stray_question_mark("why?is this here", 5));
    }

    #[test]
    fn reference_detection() {
        assert!(!has_references("This does not contain a reference."));
        assert!(!has_references("This does not contain a proper [44 reference."));
        assert!(!has_references("This does not contain a proper [...] reference."));
        assert!(!has_references("This does not contain [a] proper reference."));
        assert!(!has_references("This does not contain [1 a] proper reference."));
        assert!(has_references("This does contain a proper reference [44]."));
        assert!(has_references("This does contain a proper reference [wmyer44]."));
        assert!(has_references("This does contain multiple references [32, 33, 31]."));
    }
}
