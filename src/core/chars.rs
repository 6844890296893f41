//! Character-level normalization.
//!
//! Runs before everything else in the pipeline: expands ligature glyphs that
//! PDF copy-paste tends to produce, drops non-printable/format code points,
//! and escapes literal angle brackets so that user-typed `<`/`>` can never be
//! confused with the structural tags the pipeline introduces later.

use lazy_static::lazy_static;
use regex::Regex;

/// Ligature glyphs and their letter expansions.
static LIGATURES: phf::Map<char, &'static str> = phf::phf_map! {
    '\u{FB00}' => "ff",
    '\u{FB01}' => "fi",
    '\u{FB02}' => "fl",
    '\u{FB03}' => "ffi",
};

/// Non-printable and format code points stripped from input.
///
/// TAB, LF, CR, VT and FF are deliberately absent: the whitespace and
/// paragraph checks interpret them before they are collapsed.
static NON_PRINTABLE: phf::Set<char> = phf::phf_set! {
    // C0 controls (minus the whitespace ones above)
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', '\u{0004}', '\u{0005}',
    '\u{0006}', '\u{0007}', '\u{0008}', '\u{000E}', '\u{000F}', '\u{0010}',
    '\u{0011}', '\u{0012}', '\u{0013}', '\u{0014}', '\u{0015}', '\u{0016}',
    '\u{0017}', '\u{0018}', '\u{0019}', '\u{001A}', '\u{001B}', '\u{001C}',
    '\u{001D}', '\u{001E}', '\u{001F}', '\u{007F}',
    // C1 controls
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', '\u{0084}', '\u{0085}',
    '\u{0086}', '\u{0087}', '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}',
    '\u{008C}', '\u{008D}', '\u{008E}', '\u{008F}', '\u{0090}', '\u{0091}',
    '\u{0092}', '\u{0093}', '\u{0094}', '\u{0095}', '\u{0096}', '\u{0097}',
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', '\u{009C}', '\u{009D}',
    '\u{009E}', '\u{009F}',
    // Zero-width and bidi marks
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}',
    '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
    '\u{2060}', '\u{2061}', '\u{2062}', '\u{2063}', '\u{2064}',
    // BOM and interlinear annotation
    '\u{FEFF}', '\u{FFF9}', '\u{FFFA}', '\u{FFFB}',
};

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Expand ligature glyphs (ff, fi, fl, ffi) into their letter sequences.
pub fn expand_ligatures(text: &str) -> String {
    if !text.chars().any(|c| LIGATURES.contains_key(&c)) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match LIGATURES.get(&c) {
            Some(expansion) => out.push_str(expansion),
            None => out.push(c),
        }
    }
    out
}

/// Drop control characters, bidi marks and other format code points.
pub fn strip_non_printable(text: &str) -> String {
    text.chars().filter(|c| !NON_PRINTABLE.contains(c)).collect()
}

/// Replace literal `<` and `>` with their HTML entities.
///
/// Must run before any structural tag is introduced; afterwards every raw
/// angle bracket in the working text belongs to the pipeline itself.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Remove anything shaped like a tag (`<...>`).
///
/// Produces the plain-text projection used by the measurement checks. Safe
/// because user angle brackets were escaped up front, so only the tags the
/// pipeline introduced can match.
pub fn strip_html_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expands_known_ligatures() {
        assert_eq!(
            expand_ligatures("This contains a \u{FB01} ligature."),
            "This contains a fi ligature."
        );
        assert_eq!(expand_ligatures("o\u{FB03}ce tra\u{FB03}c"), "office traffic");
        assert_eq!(expand_ligatures("e\u{FB00}ort \u{FB02}ow"), "effort flow");
    }

    #[test]
    fn ligature_free_text_is_identity() {
        assert_eq!(expand_ligatures("plain text"), "plain text");
    }

    #[test]
    fn strips_bidi_and_control_marks() {
        assert_eq!(strip_non_printable("a\u{200E}b\u{0007}c\u{FEFF}"), "abc");
    }

    #[test]
    fn keeps_whitespace_controls() {
        assert_eq!(strip_non_printable("a\tb\nc\rd"), "a\tb\nc\rd");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(escape_angle_brackets("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_angle_brackets("<p>"), "&lt;p&gt;");
    }

    #[test]
    fn strips_tags_for_plain_projection() {
        assert_eq!(strip_html_tags("<p>Hello</p> there<br />"), "Hello there");
        assert_eq!(strip_html_tags("no tags"), "no tags");
    }
}
