//! Detection and removal of a leading "Abstract" marker.
//!
//! Pasted abstracts frequently start with the word "Abstract" followed by
//! some delimiter (`Abstract--`, `Abstract:`, "ABSTRACT. "). The check runs
//! on the plain-text projection; the strip runs on the rich text and has to
//! see past a leading `<p>` tag the whitespace normalizer may have added.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PREFIX_RE: Regex = Regex::new(r"(?i)^abstract\W*").unwrap();
    static ref RICH_PREFIX_RE: Regex = Regex::new(r"(?i)^(<p>)?abstract[^\w<]*").unwrap();
}

/// True iff the plain text starts with an "abstract" token (any case),
/// optionally followed by punctuation or dashes.
pub fn starts_with_abstract(plain_text: &str) -> bool {
    PREFIX_RE.is_match(plain_text)
}

/// Remove the leading "abstract" marker plus the non-word run after it.
///
/// A leading paragraph tag is preserved and reattached ahead of the
/// remaining content; when the marker fills its whole paragraph, the tag
/// pair goes with it. Callers must gate on [`starts_with_abstract`] over the
/// plain projection; the rich text alone may hide the marker behind a tag.
pub fn strip_prefix(rich_text: &str) -> String {
    let stripped = RICH_PREFIX_RE.replace(rich_text, "$1");
    // A marker that filled its whole paragraph leaves an empty tag pair.
    match stripped.strip_prefix("<p></p>") {
        Some(rest) => rest.to_owned(),
        None => stripped.into_owned(),
    }
}
