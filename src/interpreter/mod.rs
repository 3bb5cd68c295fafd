//! Lox interpreter execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: Main interpreter and top-level run loop
//! - [`errors`]: Runtime error types
//! - [`constants`]: Interpreter limits
//!
//! # Execution Model
//!
//! The interpreter walks the AST directly. Statements execute against a chain
//! of [`Environment`](crate::memory::environment::Environment) scopes, and every
//! executed `print` hands one chunk of text to an
//! [`OutputSink`](crate::console::output::OutputSink) as soon as it runs.

pub mod constants;
pub mod engine;
pub mod errors;
mod expressions;
mod statements;
