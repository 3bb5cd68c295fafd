//! Memory model for the Lox interpreter
//!
//! This module provides the core runtime abstractions:
//! - [`value`]: Runtime value representation (nil, booleans, numbers, strings, functions)
//! - [`environment`]: Chained lexical scopes shared by closures
//!
//! Scopes are reference counted. A function value holds the environment it was
//! declared in, so a counter created inside a factory function keeps living as
//! long as the returned closure does.

pub mod environment;
pub mod value;
