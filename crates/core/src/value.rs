//! The `Value` type: what stak programs talk about.
//!
//! Every variant that needs heap storage sits behind an [`Rc`], which
//! gives us the retain/release discipline of §3 for free: `Rc::clone`
//! is the retain, `Drop` is the release, and because quoted code is
//! built once by the parser and never mutated in place, the sharing
//! this crate does can never form a reference cycle (§9).
//!
//! The operand stack itself is *not* a `Value` in this implementation
//! (unlike the reference design, which models it as a mutable List).
//! `stak-runtime`'s `Stack` is a plain `Vec<Value>`; `List`/`VarSet`
//! values stay immutable `Rc<[Value]>` slices, which is a better fit
//! for Rust's aliasing rules and costs nothing the language can
//! observe.

use std::fmt;
use std::rc::Rc;

/// A stak value.
///
/// `List` backs both quoted code (`[ ... ]`) and the value pushed by a
/// bare list literal; `VarSet` is parsed only from `( ... )` and is
/// guaranteed (§3 invariant) to contain only `Symbol` children.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    String(Rc<str>),
    Symbol(Rc<str>),
    List(Rc<[Value]>),
    VarSet(Rc<[Value]>),
}

impl Value {
    pub fn symbol(s: impl AsRef<str>) -> Value {
        Value::Symbol(Rc::from(s.as_ref()))
    }

    pub fn string(s: impl AsRef<str>) -> Value {
        Value::String(Rc::from(s.as_ref()))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::from(items))
    }

    pub fn var_set(names: Vec<Value>) -> Value {
        Value::VarSet(Rc::from(names))
    }

    /// Name used in diagnostics ("expected Integer, found Symbol").
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Integer",
            Value::Bool(_) => "Boolean",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::List(_) => "List",
            Value::VarSet(_) => "VarSet",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Rc<str>> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Rc<[Value]>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

/// Stack rendering per §6: integers as decimal digits, booleans as
/// `true`/`false`, strings quoted, symbols bare, lists
/// bracket-delimited, var-sets paren-delimited.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                write_space_separated(f, items)?;
                write!(f, "]")
            }
            Value::VarSet(names) => {
                write!(f, "(")?;
                write_space_separated(f, names)?;
                write!(f, ")")
            }
        }
    }
}

fn write_space_separated(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_integers_and_booleans() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn renders_strings_with_quotes_and_symbols_bare() {
        assert_eq!(Value::string("hi").to_string(), "\"hi\"");
        assert_eq!(Value::symbol("dup").to_string(), "dup");
    }

    #[test]
    fn renders_nested_lists() {
        let inner = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let outer = Value::list(vec![inner]);
        assert_eq!(outer.to_string(), "[[1 2 3]]");
    }

    #[test]
    fn renders_var_sets() {
        let vs = Value::var_set(vec![Value::symbol("a"), Value::symbol("b")]);
        assert_eq!(vs.to_string(), "(a b)");
    }

    #[test]
    fn sharing_a_list_value_is_cheap_cloning_of_the_rc() {
        let list = Value::list(vec![Value::Int(1)]);
        let Value::List(inner) = &list else {
            panic!("expected List")
        };
        let strong_before = Rc::strong_count(inner);
        let cloned = list.clone();
        let Value::List(inner2) = &cloned else {
            panic!("expected List")
        };
        assert_eq!(Rc::strong_count(inner2), strong_before + 1);
    }
}
