//! # Introduction
//!
//! loxpad is an interactive console for small Lox scripts. A catalog of named
//! example scripts feeds an editor; running the editor text streams each
//! `print` to an output pane as it happens, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → select → Editor → run → Evaluator → OutputSink → OutputBuffer → Output pane
//! ```
//!
//! 1. [`console`]: catalog, selection, the run pipeline and the surface traits
//!    it drives. The run pipeline only knows the [`console::Evaluator`] trait.
//! 2. [`parser`]: tokenises Lox source and builds an AST.
//! 3. [`interpreter`]: walks the AST and sends `print` output to a sink.
//! 4. [`memory`]: runtime values and lexical scopes.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 6. [`cli`], [`config`], [`logging`]: the binary's command line, session
//!    settings and tracing setup.
//!
//! ## Supported Lox subset
//!
//! Numbers, strings, booleans, `nil`, functions and closures.
//! Control flow: `if/else`, `while`, `for`, `return`, blocks.
//! Classes are not supported.

pub mod cli;
pub mod config;
pub mod console;
pub mod interpreter;
pub mod logging;
pub mod memory;
pub mod parser;
pub mod ui;
