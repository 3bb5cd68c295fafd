//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents all possible runtime
//! values in the Lox interpreter. Values are dynamically typed; operators check
//! operand kinds at run time.
//!
//! # Value Types
//!
//! - [`Value::Nil`]: the absence of a value
//! - [`Value::Bool`]: `true` / `false`
//! - [`Value::Number`]: 64-bit float, the only numeric type
//! - [`Value::Str`]: immutable string
//! - [`Value::Function`]: a user function together with its captured environment

use super::environment::Environment;
use crate::parser::ast::FunctionDecl;
use std::fmt;
use std::rc::Rc;

/// Runtime values in the interpreter
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Function(Rc<LoxFunction>),
}

/// A function value: the declaration plus the scope it closes over
pub struct LoxFunction {
    pub decl: Rc<FunctionDecl>,
    pub closure: Environment,
}

// The closure usually contains the function itself, so Debug stops at the name
impl fmt::Debug for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxFunction")
            .field("name", &self.decl.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

impl LoxFunction {
    pub fn arity(&self) -> usize {
        self.decl.params.len()
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }
}

impl Value {
    /// `nil` and `false` are falsy; everything else is truthy
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Get the number value, returns None if not a Number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => format_number(*n, f),
            Value::Str(s) => write!(f, "{}", s),
            Value::Function(func) => write!(f, "<fn {}>", func.name()),
        }
    }
}

/// Integral numbers print without a fractional part (`6765`, not `6765.0`)
fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        // -0.0 prints as "-0", matching the float it came from
        if n == 0.0 && n.is_sign_negative() {
            write!(f, "-0")
        } else {
            write!(f, "{}", n as i64)
        }
    } else {
        write!(f, "{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::from("").is_truthy());
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Value::Number(6765.0).to_string(), "6765");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_equality_across_kinds() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_eq!(Value::from("a"), Value::from("a"));
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_ne!(Value::Nil, Value::Bool(false));
    }
}
