//! Built-in words (§4.7).
//!
//! One file per family of operations, matching the grain the teacher
//! project uses for its own operator groups (arithmetic, comparisons,
//! stack shuffling, control flow, definitions).

mod arithmetic;
mod compare;
mod control;
mod define;
mod stackops;

use crate::words::WordTable;

/// Pre-register every reserved word (§6) with its native callback.
pub fn register_all(words: &mut WordTable) {
    arithmetic::register(words);
    compare::register(words);
    stackops::register(words);
    control::register(words);
    define::register(words);
}
