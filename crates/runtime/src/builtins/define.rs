//! Word definition: `;` (§4.7).
//!
//! A definition reads `name: [ body ] ;`. The trailing-colon fallback
//! rule (§4.6) is what turns the bare `name:` token into a literal
//! symbol on the stack; `;` just pops the two pieces and registers
//! them.

use stak_core::Value;

use crate::context::Context;
use crate::error::RuntimeError;
use crate::words::WordTable;

pub fn register(words: &mut WordTable) {
    words.register_native(";", define);
}

/// Stack effect: ( name [body] -- ).
fn define(ctx: &mut Context, word: &str) -> Result<(), RuntimeError> {
    let body = ctx.stack.pop_checked(word)?;
    let Value::List(body) = body else {
        return Err(RuntimeError::ExpectedList {
            word: word.to_string(),
            role: "body",
        });
    };

    let name = ctx.stack.pop_checked(word)?;
    let Value::Symbol(name) = name else {
        return Err(RuntimeError::TypeMismatch {
            word: word.to_string(),
            expected: "Symbol",
            found: name.kind_name(),
        });
    };

    ctx.words.register_user(&name, body);
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
    fn defines_and_calls_a_user_word() {
        assert_eq!(eval("sq: [ dup * ] ; 6 sq").render_stack(), "[36]");
    }

    #[test]
    fn user_words_can_recurse() {
        let source =
            "countdown: [ (n) $n [ $n 1 - countdown ] $n 0 > if ] ; 3 countdown";
        assert_eq!(eval(source).render_stack(), "[3 2 1 0]");
    }

    #[test]
    fn redefining_a_built_in_word_replaces_it() {
        assert_eq!(eval("+: [ drop drop 0 ] ; 2 3 +").render_stack(), "[0]");
    }

    #[test]
    fn missing_body_reports_a_type_error_without_panicking() {
        assert_eq!(eval("sq: ;").render_stack(), "[]");
    }
}
