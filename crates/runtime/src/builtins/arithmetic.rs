//! Integer arithmetic: `+ - * / %` (§4.7).
//!
//! All five share one handler, dispatching on the operator byte, the
//! way the reference interpreter's `basicMathFunction` does.
//!
//! Overflow wraps rather than panics, matching the wrapping-integer
//! convention this language family uses elsewhere: `i64::MAX + 1`
//! wraps to `i64::MIN`. Division and modulo by zero are reported as
//! [`RuntimeError::DivisionByZero`] instead of trapping.

use stak_core::Value;

use crate::context::Context;
use crate::error::RuntimeError;
use crate::eval::forced_pop;
use crate::words::WordTable;

pub fn register(words: &mut WordTable) {
    for op in ["+", "-", "*", "/", "%"] {
        words.register_native(op, arithmetic);
    }
}

/// Stack effect: ( n2 n1 -- n2 op n1 ). `n1` is the top of stack, so
/// `a b -` computes `a - b`.
fn arithmetic(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let n1 = expect_int(ctx, word)?;
    let n2 = expect_int(ctx, word)?;

    let result = match word {
        "+" => n2.wrapping_add(n1),
        "-" => n2.wrapping_sub(n1),
        "*" => n2.wrapping_mul(n1),
        "/" => {
            if n1 == 0 {
                return Err(RuntimeError::DivisionByZero {
                    word: word.to_string(),
                });
            }
            n2.wrapping_div(n1)
        }
        "%" => {
            if n1 == 0 {
                return Err(RuntimeError::DivisionByZero {
                    word: word.to_string(),
                });
            }
            n2.wrapping_rem(n1)
        }
        other => unreachable!("arithmetic only registered for +-*/%, got {other}"),
    };

    ctx.stack.push(Value::Int(result));
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
