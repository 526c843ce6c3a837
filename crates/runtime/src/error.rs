//! Runtime diagnostics (§4.9, §7 "Type error" / "Name resolution error").
//!
//! A [`RuntimeError`] never unwinds past the word that raised it: the
//! evaluator logs it with `tracing::warn!` and moves on to the next
//! program element, per §7's non-fatal runtime-error policy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{word}: stack underflow (needed {needed}, found {found})")]
    StackUnderflow {
        word: String,
        needed: usize,
        found: usize,
    },

    #[error("{word}: expected {expected}, found {found}")]
    TypeMismatch {
        word: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{word}: division by zero")]
    DivisionByZero { word: String },

    #[error("cannot resolve {symbol}")]
    UnresolvedSymbol { symbol: String },

    #[error("unbound variable ${name}")]
    UnboundVariable { name: String },

    #[error("{word}: expected a {role} list, found a non-list value")]
    ExpectedList { word: String, role: &'static str },
}
