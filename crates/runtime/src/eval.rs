//! The evaluator (§4.6): walks a program list, dispatches symbols
//! through the word table, resolves variables, and recurses into
//! quoted blocks.

use stak_core::Value;
use tracing::warn;

use crate::context::Context;
use crate::error::RuntimeError;
use crate::words::WordBinding;

/// Execute `prog` against `ctx`, mutating its stack/word/var tables.
///
/// Per §7, most runtime errors are non-fatal: each one is logged and
/// the loop moves on to the next program element rather than
/// unwinding. This is also why `exec` itself returns `()` — there is
/// nothing for a caller to propagate.
pub fn exec(ctx: &mut Context, prog: &[Value]) {
    for value in prog {
        match value {
            Value::Symbol(symbol) => dispatch_symbol(ctx, symbol),
            Value::VarSet(names) => bind_var_set(ctx, names),
            other => ctx.stack.push(other.clone()),
        }
    }
}

fn dispatch_symbol(ctx: &mut Context, symbol: &str) {
    let binding = ctx.words.lookup(symbol).cloned();
    match binding {
        Some(WordBinding::Native(callback)) => {
            if let Err(err) = callback(ctx, symbol) {
                warn!(word = symbol, error = %err, "runtime error");
            }
        }
        Some(WordBinding::User(body)) => exec(ctx, &body),
        None => dispatch_fallback(ctx, symbol),
    }
}

/// The two syntactic fallback rules of §4.6, consulted only once
/// word-table lookup has already failed (§9's fix for the reference
/// source's null-deref-before-fallback bug).
fn dispatch_fallback(ctx: &mut Context, symbol: &str) {
    if let Some(name) = symbol.strip_suffix(':') {
        ctx.stack.push(Value::symbol(name));
    } else if let Some(name) = symbol.strip_prefix('$') {
        match ctx.vars.lookup(name) {
            Some(value) => ctx.stack.push(value.clone()),
            None => warn!(
                error = %RuntimeError::UnboundVariable { name: name.to_string() },
                "runtime error"
            ),
        }
    } else {
        warn!(
            error = %RuntimeError::UnresolvedSymbol { symbol: symbol.to_string() },
            "runtime error"
        );
    }
}

/// §4.6: for each symbol in the var-set, in the order written, pop
/// the current stack top and bind it.
fn bind_var_set(ctx: &mut Context, names: &[Value]) {
    for name in names {
        let Value::Symbol(name) = name else {
            unreachable!("parser guarantees VarSet children are symbols");
        };
        match ctx.stack.pop_checked(&format!("({name})")) {
            Ok(value) => ctx.vars.set(name, value),
            Err(err) => warn!(var = %name, error = %err, "runtime error"),
        }
    }
}

/// The lazy-evaluation helper of §4.5: while the stack top is a List,
/// pop it and exec it, re-examining the new top, until the top is a
/// concrete (non-List) value or the stack runs dry.
pub fn force_top(ctx: &mut Context) {
    while matches!(ctx.stack.peek(0), Some(Value::List(_))) {
        let Some(Value::List(items)) = ctx.stack.pop() else {
            unreachable!("just confirmed top is a List");
        };
        exec(ctx, &items);
    }
}

/// Force the stack top (§4.5), then pop it, reporting underflow under
/// `word`'s name. Used by every built-in that wants a concrete operand
/// rather than "whatever is on top" (§4.7).
pub fn forced_pop(ctx: &mut Context, word: &str) -> Result<Value, RuntimeError> {
    force_top(ctx);
    ctx.stack.pop_checked(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stak_core::parse_program;

    fn run(source: &str) -> Context {
        let mut ctx = Context::new();
        let Value::List(items) = parse_program(source).unwrap() else {
            unreachable!()
        };
        exec(&mut ctx, &items);
        ctx
    }

    #[test]
    fn pushes_literals_and_quoted_lists_without_evaluating_them() {
        let ctx = run("[ 1 2 3 ]");
        assert_eq!(ctx.stack.render(), "[[1 2 3]]");
    }

    #[test]
    fn var_set_binds_in_written_order_against_successive_pops() {
        let ctx = run("3 4 (a b) $a $b");
        assert_eq!(ctx.stack.render(), "[4 3]");
    }

    #[test]
    fn unresolved_symbol_is_reported_and_execution_continues() {
        let ctx = run("5 3 < 7 3 < and-is-not-defined");
        // The unresolved symbol is dropped without aborting the run: both
        // comparisons before it still land on the stack.
        assert_eq!(ctx.stack.render(), "[false false]");
        assert_eq!(ctx.stack_len(), 2);
    }

    #[test]
    fn trailing_colon_rule_pushes_a_bare_symbol() {
        let ctx = run("foo:");
        assert_eq!(ctx.stack.render(), "[foo]");
    }
}
