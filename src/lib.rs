//! Absfmt - abstract normalizer and checker
//!
//! Cleans academic-paper abstracts pasted as raw text or LaTeX source into
//! an HTML-renderable string and reports advisory diagnostics: stripped
//! comments, paragraph structure, length, terminal punctuation, bracketed
//! references, leftover TeX markup and an AFINN-style sentiment score.
//!
//! ```
//! use absfmt::format_abstract;
//!
//! let outcome = format_abstract("Abstract--We study \\textbf{eleven} systems in the wild.");
//! assert_eq!(outcome.html, "We study eleven systems in the wild.");
//! ```

pub mod core;
pub mod pipeline;
pub mod sentiment;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the main entry points
pub use pipeline::{format_abstract, FormatOptions, FormatOutcome, Formatter};
pub use sentiment::{Lexicon, SentimentResult};
pub use utils::diagnostics::{ids as diagnostic_ids, Diagnostic, DiagnosticSet, Severity};
