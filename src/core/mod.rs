//! Core text-transformation functions.
//!
//! Each submodule is one stage of the formatting pipeline: pure string in,
//! string (or predicate) out, no shared state. [`crate::pipeline`] composes
//! them in their required order.

pub mod chars;
pub mod checks;
pub mod comments;
pub mod prefix;
pub mod tex;
pub mod whitespace;
