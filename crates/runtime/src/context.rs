//! The execution context (§4.8): owns the stack, word table, and
//! variable table for one interpreter run.

use crate::builtins;
use crate::stack::Stack;
use crate::vars::VarTable;
use crate::words::WordTable;

pub struct Context {
    pub(crate) stack: Stack,
    pub(crate) words: WordTable,
    pub(crate) vars: VarTable,
}

impl Context {
    /// Build a context with an empty stack and variable table, and
    /// every built-in word (§4.7) pre-registered.
    pub fn new() -> Self {
        let mut words = WordTable::new();
        builtins::register_all(&mut words);
        Context {
            stack: Stack::new(),
            words,
            vars: VarTable::new(),
        }
    }

    /// The final stack rendering the CLI prints (§6).
    pub fn render_stack(&self) -> String {
        self.stack.render()
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
