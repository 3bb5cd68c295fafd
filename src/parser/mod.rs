//! Lox source code parser
//!
//! This module transforms Lox source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, helpers and errors (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Lox Subset
//!
//! - Values: numbers, strings, booleans, `nil`, first-class functions
//! - Statements: `var`, `fun`, `print`, `return`, `if`/`else`, `while`, `for`, blocks
//! - Expressions: arithmetic, comparison, equality, `and`/`or`, `!`, unary `-`,
//!   assignment, calls
//! - No classes: `class`, `this`, `super` and property access are rejected
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
