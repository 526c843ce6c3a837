//! The variable table (§4.4).

use std::rc::Rc;

use stak_core::Value;

/// Ordered table of (name, value) pairs bound by var-sets (§4.4, §4.6).
#[derive(Default)]
pub struct VarTable {
    entries: Vec<(Rc<str>, Value)>,
}

impl VarTable {
    pub fn new() -> Self {
        VarTable {
            entries: Vec::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// Bind `name` to `value`, overwriting any prior binding.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n.as_ref() == name) {
            entry.1 = value;
        } else {
            self.entries.push((Rc::from(name), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_lookup() {
        let mut vars = VarTable::new();
        vars.set("x", Value::Int(10));
        assert_eq!(vars.lookup("x"), Some(&Value::Int(10)));
        assert_eq!(vars.lookup("y"), None);
    }

    #[test]
    fn set_overwrites_prior_binding() {
        let mut vars = VarTable::new();
        vars.set("x", Value::Int(1));
        vars.set("x", Value::Int(2));
        assert_eq!(vars.lookup("x"), Some(&Value::Int(2)));
    }
}
