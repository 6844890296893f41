//! TeX comment stripping.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A line whose first non-blank character is `%`, removed with its newline.
    static ref LINE_COMMENT_RE: Regex = Regex::new(r"(?m)^[\t ]*%.*\n?").unwrap();
    // A `%` later in the line, preceded by at least one space or tab. The
    // separating blanks are consumed along with the comment.
    static ref TRAILING_COMMENT_RE: Regex = Regex::new(r"(?m)[\t ]+%.*$").unwrap();
}

/// Remove TeX-style `%` comments.
///
/// Whole comment lines disappear including their line break; trailing
/// comments are cut from the blank run that precedes the `%`. A `%` escaped
/// as `\%` is never treated as a comment start, since both patterns require
/// blank space (or start of line) in front of it. Returns the cleaned text
/// and whether anything was removed.
pub fn remove_comments(text: &str) -> (String, bool) {
    let pass = LINE_COMMENT_RE.replace_all(text, "");
    let cleaned = TRAILING_COMMENT_RE.replace_all(&pass, "").into_owned();
    let changed = cleaned != text;
    (cleaned, changed)
}
