//! Integer comparisons: `> < =` (§4.7).

use stak_core::Value;

use crate::context::Context;
use crate::error::RuntimeError;
use crate::eval::forced_pop;
use crate::words::WordTable;

pub fn register(words: &mut WordTable) {
    for op in [">", "<", "="] {
        words.register_native(op, compare);
    }
}

/// Stack effect: ( n2 n1 -- n2 op n1 ).
fn compare(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let n1 = expect_int(ctx, word)?;
    let n2 = expect_int(ctx, word)?;

    let result = match word {
        ">" => n2 > n1,
        "<" => n2 < n1,
        "=" => n2 == n1,
        other => unreachable!("compare only registered for ><=, got {other}"),
    };

    ctx.stack.push(Value::Bool(result));
    Ok(())
}

fn expect_int(ctx: &mut Context, word: &str) -> Result<i64, RuntimeError> {
    let value = forced_pop(ctx, word)?;
    value.as_int().ok_or_else(|| RuntimeError::TypeMismatch {
        word: word.to_string(),
        expected: "Integer",
        found: value.kind_name(),
    })
}
