//! Stack shuffling: `dup drop swap` (§4.7).
//!
//! These operate on whatever is on top without forcing it — unlike
//! the arithmetic/comparison/control words, they have no type
//! requirement, so a quoted block can be duplicated, dropped, or
//! swapped without being executed.

use crate::context::Context;
use crate::error::RuntimeError;
use crate::words::WordTable;

pub fn register(words: &mut WordTable) {
    words.register_native("dup", dup);
    words.register_native("drop", drop_top);
    words.register_native("swap", swap);
}

/// Stack effect: ( a -- a a ).
fn dup(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let top = ctx.stack.peek_checked(word, 0)?.clone();
    ctx.stack.push(top);
    Ok(())
}

/// Stack effect: ( a -- ).
fn drop_top(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    ctx.stack.pop_checked(word)?;
    Ok(())
}

/// Stack effect: ( a b -- b a ).
fn swap(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    ctx.stack.require(word, 2)?;
    let top = ctx.stack.pop_checked(word)?;
    let second = ctx.stack.pop_checked(word)?;
    ctx.stack.push(top);
    ctx.stack.push(second);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::eval::exec;
    use stak_core::{Value, parse_program};

    fn eval(source: &str) -> Context {
        let mut ctx = Context::new();
        let Value::List(items) = parse_program(source).unwrap() else {
            unreachable!()
        };
        exec(&mut ctx, &items);
        ctx
    }

    #[test]
    fn swap_exchanges_top_two() {
        assert_eq!(eval("1 2 swap").render_stack(), "[2 1]");
    }

    #[test]
    fn dup_duplicates_top() {
        assert_eq!(eval("7 dup").render_stack(), "[7 7]");
    }

    #[test]
    fn drop_discards_top() {
        assert_eq!(eval("9 drop").render_stack(), "[]");
    }

    #[test]
    fn dup_on_empty_stack_reports_underflow_without_panicking() {
        assert_eq!(eval("dup").render_stack(), "[]");
    }
}
