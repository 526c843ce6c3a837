//! The word table (§4.3).
//!
//! Per §9's design note, a binding is a two-variant sum — never two
//! nullable fields — so "native and user body both absent" is not a
//! state the type can represent.

use std::rc::Rc;

use stak_core::Value;

use crate::context::Context;
use crate::error::RuntimeError;

/// A native built-in's implementation: it sees the symbol that
/// invoked it (useful for shared handlers like arithmetic, which
/// dispatch on the operator byte) and the context to operate on.
pub type NativeFn = fn(&mut Context, &str) -> Result<(), RuntimeError>;

#[derive(Clone)]
pub enum WordBinding {
    Native(NativeFn),
    User(Rc<[Value]>),
}

/// Ordered table of (symbol, binding) entries (§4.3).
///
/// Linear scan is acceptable at this size (§9); swapping the backing
/// store for a `HashMap` would not change the semantics below.
#[derive(Default)]
pub struct WordTable {
    entries: Vec<(Rc<str>, WordBinding)>,
}

impl WordTable {
    pub fn new() -> Self {
        WordTable {
            entries: Vec::new(),
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<&WordBinding> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_ref() == symbol)
            .map(|(_, binding)| binding)
    }

    pub fn register_native(&mut self, symbol: &str, callback: NativeFn) {
        self.register(symbol, WordBinding::Native(callback));
    }

    pub fn register_user(&mut self, symbol: &str, body: Rc<[Value]>) {
        self.register(symbol, WordBinding::User(body));
    }

    /// Create or replace the entry for `symbol`. Replacing drops the
    /// old binding (and, with it, any `Rc<[Value]>` body it held).
    fn register(&mut self, symbol: &str, binding: WordBinding) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| name.as_ref() == symbol) {
            entry.1 = binding;
        } else {
            self.entries.push((Rc::from(symbol), binding));
        }
    }
}
