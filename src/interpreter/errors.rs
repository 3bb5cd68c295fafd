//! Runtime error types for the Lox interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to lex or parse errors).
//!
//! All runtime errors are fatal - they halt the run. Output printed before the
//! error has already been delivered to the sink and is not retracted.

use crate::parser::ast::SourceLocation;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Read of a name that no enclosing scope declares
    #[error("Undefined variable '{name}' at line {}", .location.line)]
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },

    /// Assignment to a name that no enclosing scope declares
    #[error("Cannot assign to undeclared variable '{name}' at line {}", .location.line)]
    UndeclaredAssignment {
        name: String,
        location: SourceLocation,
    },

    /// Operand kinds not accepted by an operator
    #[error("{message} at line {}", .location.line)]
    TypeError {
        message: String,
        location: SourceLocation,
    },

    /// Call on something that is not a function
    #[error("Can only call functions, got {got} at line {}", .location.line)]
    NotCallable {
        got: String,
        location: SourceLocation,
    },

    /// Function argument count mismatch
    #[error(
        "{function} expected {expected} argument(s) but got {got} at line {}",
        .location.line
    )]
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        got: usize,
        location: SourceLocation,
    },

    /// `return` executed outside any function body
    #[error("Can't return from top-level code at line {}", .location.line)]
    ReturnOutsideFunction { location: SourceLocation },

    /// Call nesting exceeded the interpreter limit
    #[error("Stack overflow: call depth exceeded {limit} at line {}", .location.line)]
    StackOverflow {
        limit: usize,
        location: SourceLocation,
    },
}

impl RuntimeError {
    pub fn location(&self) -> SourceLocation {
        match self {
            RuntimeError::UndefinedVariable { location, .. }
            | RuntimeError::UndeclaredAssignment { location, .. }
            | RuntimeError::TypeError { location, .. }
            | RuntimeError::NotCallable { location, .. }
            | RuntimeError::ArgumentCountMismatch { location, .. }
            | RuntimeError::ReturnOutsideFunction { location }
            | RuntimeError::StackOverflow { location, .. } => *location,
        }
    }
}
