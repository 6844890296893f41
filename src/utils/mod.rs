//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and severity levels
//! - Error types for lexicon loading

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{Diagnostic, DiagnosticSet, Severity};
pub use error::{LexiconError, LexiconResult};
