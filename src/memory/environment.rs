//! Lexical environments
//!
//! An [`Environment`] is a handle to a chain of scopes. Cloning the handle is
//! cheap and shares the underlying scope, which is how closures keep the
//! variables they captured alive after the defining call returns.

use super::value::Value;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Scope {
    values: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Shared handle to one scope and, through it, all enclosing scopes
#[derive(Debug, Clone, Default)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

impl Environment {
    /// Create an empty global scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child scope enclosed by this one
    pub fn child(&self) -> Self {
        Environment {
            scope: Rc::new(RefCell::new(Scope {
                values: FxHashMap::default(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Declare (or redeclare) a name in this scope
    pub fn define(&self, name: &str, value: Value) {
        self.scope.borrow_mut().values.insert(name.to_string(), value);
    }

    /// Look a name up through the scope chain
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.scope.borrow();
        match scope.values.get(name) {
            Some(value) => Some(value.clone()),
            None => scope.parent.as_ref().and_then(|parent| parent.get(name)),
        }
    }

    /// Assign to the nearest scope that declares `name`.
    /// Returns false if no enclosing scope declares it.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut scope = self.scope.borrow_mut();
        if let Some(slot) = scope.values.get_mut(name) {
            *slot = value;
            return true;
        }
        match &scope.parent {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }

    /// Names declared directly in this scope, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scope.borrow().values.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_sees_parent() {
        let globals = Environment::new();
        globals.define("x", Value::Number(1.0));
        let inner = globals.child();
        assert_eq!(inner.get("x"), Some(Value::Number(1.0)));
        assert_eq!(inner.get("y"), None);
    }

    #[test]
    fn test_shadowing_does_not_touch_parent() {
        let globals = Environment::new();
        globals.define("x", Value::Number(1.0));
        let inner = globals.child();
        inner.define("x", Value::Number(2.0));
        assert_eq!(inner.get("x"), Some(Value::Number(2.0)));
        assert_eq!(globals.get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn test_assign_walks_to_declaring_scope() {
        let globals = Environment::new();
        globals.define("count", Value::Number(0.0));
        let inner = globals.child().child();
        assert!(inner.assign("count", Value::Number(5.0)));
        assert_eq!(globals.get("count"), Some(Value::Number(5.0)));
        assert!(!inner.assign("missing", Value::Nil));
    }
}
