//! Regex-driven TeX markup rewriting.
//!
//! No attempt at real LaTeX parsing: each rewrite is an explicit function
//! with a fixed place in the composition order, because several rules only
//! work when applied in sequence (math before command stripping, `---`
//! before `--`, double quotes before single quotes).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // \begin{math} ... \end{math} with the interior trimmed. Single-line
    // contents only; the pipeline has collapsed whitespace by the time this
    // runs, and raw multi-line environments stay put to be flagged instead.
    static ref MATH_ENV_RE: Regex =
        Regex::new(r"(?i)\\begin\{math\}\s*(.*?)\s*\\end\{math\}").unwrap();
    // Inline $...$ spans consisting solely of digits, x, arithmetic and
    // comparison symbols, carets and spaces. No newline in the class, so a
    // span crossing a line break never matches.
    static ref TRIVIAL_MATH_RE: Regex = Regex::new(r"\$([0-9x*+\-/><=()^ ]+?)?\$").unwrap();
    // Any remaining dollar-delimited span, across line breaks.
    static ref DOLLAR_SPAN_RE: Regex = Regex::new(r"(?s)\$.*?\$").unwrap();
    static ref DOLLAR_CARET_RE: Regex = Regex::new(r"(?s)\$[^$]*\^[^$]*\$").unwrap();
    // \cmd{content} and {\cmd content}: wrapper removed, content kept.
    static ref CMD_BRACE_RE: Regex = Regex::new(r"\\\S+?\{(.*?)\}").unwrap();
    static ref BRACE_CMD_RE: Regex = Regex::new(r"\{\\\S+(.*?)\}").unwrap();
    static ref FORCED_BREAK_RE: Regex = Regex::new(r"\\\\").unwrap();
    // A tilde bound between two non-space characters is TeX's protected space.
    static ref TILDE_RE: Regex = Regex::new(r"(\S)~(\S)").unwrap();
    static ref DOUBLE_QUOTE_RE: Regex = Regex::new(r"``(.*?)''").unwrap();
    static ref SINGLE_QUOTE_RE: Regex = Regex::new(r"`(.*?)'").unwrap();
}

/// Outcome of [`rewrite_math`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathRewrite {
    /// Text with trivial math inlined
    pub text: String,
    /// A `$...$` span survived the rewrite (complex math kept verbatim)
    pub complex_remaining: bool,
    /// The input carried a caret inside a dollar span (an exponent was
    /// inlined literally)
    pub exponent_inlined: bool,
}

/// Inline trivial TeX math.
///
/// Collapses `\begin{math}...\end{math}` to its contents, maps `\cdot` to
/// `*` and `\times` to `x`, then inlines `$...$` spans made only of digits,
/// `x`, operators, carets and spaces. Anything fancier is left untouched and
/// reported via [`MathRewrite::complex_remaining`].
pub fn rewrite_math(input: &str) -> MathRewrite {
    let exponent_inlined = DOLLAR_CARET_RE.is_match(input);

    let text = MATH_ENV_RE.replace_all(input, "$1");
    let text = text.replace("\\cdot", "*").replace("\\times", "x");
    let text = TRIVIAL_MATH_RE.replace_all(&text, "$1").into_owned();

    let complex_remaining = DOLLAR_SPAN_RE.is_match(&text);
    MathRewrite {
        text,
        complex_remaining,
        // Only meaningful when the span actually got inlined.
        exponent_inlined: exponent_inlined && !complex_remaining,
    }
}

/// Strip TeX command markup and map typographic shorthands to entities.
///
/// Runs after [`rewrite_math`]. Removes `\cmd{...}` and `{\cmd ...}`
/// wrappers (content preserved), turns `\\` into `<br />`, drops leftover
/// backslashes, substitutes dashes (`---` before `--`), protected-space
/// tildes, and LaTeX quote pairs (double before single). Returns the
/// rewritten text and whether the wrapper stripping changed anything.
pub fn rewrite_syntax(input: &str) -> (String, bool) {
    let stripped = CMD_BRACE_RE.replace_all(input, "$1");
    let stripped = BRACE_CMD_RE.replace_all(&stripped, "$1").into_owned();
    let styling_changed = stripped != input;

    let text = FORCED_BREAK_RE.replace_all(&stripped, "<br />");
    let text = text.replace('\\', "");
    let text = text.replace("---", "&mdash;");
    let text = text.replace("--", "&ndash;");
    let text = TILDE_RE.replace_all(&text, "${1} ${2}");
    let text = DOUBLE_QUOTE_RE.replace_all(&text, "&ldquo;${1}&rdquo;");
    let text = SINGLE_QUOTE_RE.replace_all(&text, "&lsquo;${1}&rsquo;");

    (text.into_owned(), styling_changed)
}
