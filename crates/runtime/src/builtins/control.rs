//! Conditionals and loops: `if ifelse while` (§4.7).
//!
//! The boolean condition is lazily forced (§4.5) before it is read,
//! but branch/body arguments are required to already be concrete
//! `List` values — forcing those would execute them unconditionally,
//! defeating the point of passing them quoted.

use stak_core::Value;

use crate::context::Context;
use crate::error::RuntimeError;
use crate::eval::{exec, forced_pop};
use crate::words::WordTable;

pub fn register(words: &mut WordTable) {
    words.register_native("if", if_word);
    words.register_native("ifelse", ifelse);
    words.register_native("while", while_word);
}

/// Stack effect: ( [then] bool -- ... ). Execs `then` when `bool` is
/// true; otherwise discards it.
fn if_word(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let cond = expect_bool(ctx, word)?;
    let then_branch = expect_list(ctx, word, "then")?;
    if cond {
        exec(ctx, &then_branch);
    }
    Ok(())
}

/// Stack effect: ( [else] [then] bool -- ... ).
fn ifelse(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let cond = expect_bool(ctx, word)?;
    let then_branch = expect_list(ctx, word, "then")?;
    let else_branch = expect_list(ctx, word, "else")?;
    exec(ctx, if cond { &then_branch } else { &else_branch });
    Ok(())
}

/// Stack effect: ( [body] [cond] -- ... ). Execs `cond`, pops the
/// boolean it must leave on top, and repeats `body`/`cond` while that
/// boolean is true.
fn while_word(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let condition = expect_list(ctx, word, "condition")?;
    let body = expect_list(ctx, word, "body")?;

    loop {
        exec(ctx, &condition);
        let result = ctx.stack.pop_checked(word)?;
        let Value::Bool(continue_loop) = result else {
            return Err(RuntimeError::TypeMismatch {
                word: word.to_string(),
                expected: "Boolean",
                found: result.kind_name(),
            });
        };
        if !continue_loop {
            return Ok(());
        }
        exec(ctx, &body);
    }
}

fn expect_bool(ctx: &mut Context, word: &str) -> Result<bool, RuntimeError> {
    let value = forced_pop(ctx, word)?;
    value.as_bool().ok_or_else(|| RuntimeError::TypeMismatch {
        word: word.to_string(),
        expected: "Boolean",
        found: value.kind_name(),
    })
}

fn expect_list(
    ctx: &mut Context,
    word: &str,
    role: &'static str,
) -> Result<std::rc::Rc<[Value]>, RuntimeError> {
    let value = ctx.stack.pop_checked(word)?;
    match value {
        Value::List(items) => Ok(items),
        _ => Err(RuntimeError::ExpectedList {
            word: word.to_string(),
            role,
        }),
    }
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
    fn if_runs_then_branch_when_true() {
        assert_eq!(eval("[ 10 ] true if").render_stack(), "[10]");
    }

    #[test]
    fn if_discards_then_branch_when_false() {
        assert_eq!(eval("[ 10 ] false if").render_stack(), "[]");
    }

    #[test]
    fn ifelse_picks_then_branch_on_true() {
        assert_eq!(eval("[ 20 ] [ 10 ] true ifelse").render_stack(), "[10]");
    }

    #[test]
    fn ifelse_picks_else_branch_on_false() {
        assert_eq!(eval("[ 20 ] [ 10 ] false ifelse").render_stack(), "[20]");
    }

    #[test]
    fn while_counts_down_to_zero() {
        assert_eq!(
            eval("3 [ 1 - ] [ dup 0 > ] while").render_stack(),
            "[0]"
        );
    }

    #[test]
    fn while_runs_body_while_condition_holds() {
        assert_eq!(
            eval("0 [ 1 + ] [ dup 5 < ] while").render_stack(),
            "[5]"
        );
    }
}
