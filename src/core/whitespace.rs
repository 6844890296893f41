//! Whitespace normalization and paragraph wrapping.
//!
//! Turns the multi-line pasted input into one flat line of text. Unless the
//! caller asks for flattening, paragraph breaks (blank-line runs) are encoded
//! as `<p>...</p>` spans before the line breaks are collapsed away, so the
//! structure survives the collapse. Line-broken hyphenation is repaired while
//! the line breaks still exist.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One or more blank lines between non-blank runs (lines are trimmed first,
    // so a blank line is an empty one).
    static ref BLANK_RUN_RE: Regex = Regex::new(r"\n{2,}").unwrap();
    // `word-\nand` / `word-\nund`: a line break after a deliberate hyphen
    // followed by a connector word. The hyphen stays.
    static ref HYPHEN_CONNECTOR_RE: Regex = Regex::new(r"(\w+)-\n(and|und)\b").unwrap();
    // `word-\nword`: hyphenation introduced purely by line breaking. The two
    // halves are joined and the hyphen dropped.
    static ref HYPHEN_JOIN_RE: Regex = Regex::new(r"(\w+)-\n(\w+)").unwrap();
    static ref WS_RUN_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse the input into a single line, optionally wrapping paragraphs.
///
/// Steps, in order: per-line trimming, CR removal, paragraph wrapping (unless
/// `flatten`), hyphenation repair, whitespace-run collapse, outer trim. With
/// `flatten` every line break simply becomes a space.
pub fn normalize(text: &str, flatten: bool) -> String {
    // split('\n') instead of lines(): trailing blank lines carry paragraph
    // structure and must survive until the wrap step.
    let line_trimmed = text
        .replace('\r', "")
        .split('\n')
        .map(|line| line.trim_matches(|c| c == ' ' || c == '\t'))
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped = if flatten {
        line_trimmed
    } else {
        wrap_paragraphs(&line_trimmed)
    };

    let repaired = HYPHEN_CONNECTOR_RE.replace_all(&wrapped, "${1}- ${2}");
    let repaired = HYPHEN_JOIN_RE.replace_all(&repaired, "${1}${2}");

    let collapsed = WS_RUN_RE.replace_all(&repaired, " ");
    collapsed.trim().to_string()
}

/// Wrap paragraph runs in `<p>` tags.
///
/// The document is split on blank-line runs into an ordered paragraph
/// sequence. Every segment that is followed by a paragraph break gets
/// wrapped; whitespace-only segments collapse to nothing (no empty tag
/// pairs); the trailing segment is kept as-is.
fn wrap_paragraphs(text: &str) -> String {
    let segments: Vec<&str> = BLANK_RUN_RE.split(text).collect();
    let last = segments.len() - 1;
    let mut out = String::with_capacity(text.len() + 16);
    for (i, segment) in segments.iter().enumerate() {
        if i == last {
            out.push_str(segment);
        } else if !segment.trim().is_empty() {
            out.push_str("<p>");
            out.push_str(segment.trim());
            out.push_str("</p>");
        }
    }
    out
}
