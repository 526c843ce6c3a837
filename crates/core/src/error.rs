//! Parse-time diagnostics
//!
//! A [`ParseError`] is the parser's only failure mode (§7: "Syntax
//! error"). It never panics and never allocates more than the message
//! itself requires.

use thiserror::Error;

/// How many bytes of source to show around an offending offset.
const EXCERPT_LEN: usize = 32;

/// Something the tokenizer could not make sense of.
///
/// Each variant carries the byte offset of the offending position so a
/// caller can point a user at the right place in their source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error at byte {offset}: no token matches near {excerpt:?}")]
    NoMatch { offset: usize, excerpt: String },

    #[error("syntax error at byte {offset}: unterminated string literal")]
    UnterminatedString { offset: usize },

    #[error("syntax error at byte {offset}: unterminated quoted list")]
    UnterminatedList { offset: usize },

    #[error("syntax error at byte {offset}: unterminated var-set")]
    UnterminatedVarSet { offset: usize },

    #[error("syntax error at byte {offset}: number exceeds 128 digits")]
    NumberTooLong { offset: usize },

    #[error("syntax error at byte {offset}: non-alphanumeric byte in var-set")]
    InvalidVarSetByte { offset: usize },
}

impl ParseError {
    /// Byte offset into the source at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::NoMatch { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::UnterminatedList { offset }
            | ParseError::UnterminatedVarSet { offset }
            | ParseError::NumberTooLong { offset }
            | ParseError::InvalidVarSetByte { offset } => *offset,
        }
    }
}

/// Render a short, printable excerpt of `bytes` starting at `offset`.
///
/// Used to build the `excerpt` field of [`ParseError::NoMatch`]; kept
/// here rather than inline so both the parser and tests can reuse it.
pub(crate) fn excerpt(bytes: &[u8], offset: usize) -> String {
    let end = (offset + EXCERPT_LEN).min(bytes.len());
    String::from_utf8_lossy(&bytes[offset..end]).into_owned()
}
