//! Statement execution implementation
//!
//! This module handles the execution of all Lox statement types:
//!
//! - Variable and function declarations
//! - `print`, which hands one chunk of text to the output sink
//! - Control flow (if/else, while; `for` arrives already desugared)
//! - Blocks, which run in a fresh child scope
//! - `return`, signalled to the caller through [`ControlFlow::Return`]
//!
//! All statement execution methods are implemented as `pub(crate)` methods
//! on the [`Interpreter`] struct.

use crate::console::output::OutputSink;
use crate::interpreter::engine::{ControlFlow, Interpreter};
use crate::interpreter::errors::RuntimeError;
use crate::memory::environment::Environment;
use crate::memory::value::{LoxFunction, Value};
use crate::parser::ast::Stmt;
use std::rc::Rc;

impl Interpreter {
    pub(crate) fn execute_statement(
        &mut self,
        stmt: &Stmt,
        env: &Environment,
        out: &mut dyn OutputSink,
    ) -> Result<ControlFlow, RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr, env, out)?;
                Ok(ControlFlow::Normal)
            }

            Stmt::Print { expr, .. } => {
                let value = self.evaluate(expr, env, out)?;
                out.append(&value.to_string());
                Ok(ControlFlow::Normal)
            }

            Stmt::VarDecl { name, init, .. } => {
                let value = match init {
                    Some(expr) => self.evaluate(expr, env, out)?,
                    None => Value::Nil,
                };
                env.define(name, value);
                Ok(ControlFlow::Normal)
            }

            Stmt::Function(decl) => {
                let function = LoxFunction {
                    decl: Rc::clone(decl),
                    closure: env.clone(),
                };
                env.define(&decl.name, Value::Function(Rc::new(function)));
                Ok(ControlFlow::Normal)
            }

            Stmt::Block(statements) => self.execute_block(statements, &env.child(), out),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, env, out)?.is_truthy() {
                    self.execute_statement(then_branch, env, out)
                } else if let Some(else_branch) = else_branch {
                    self.execute_statement(else_branch, env, out)
                } else {
                    Ok(ControlFlow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition, env, out)?.is_truthy() {
                    if let flow @ ControlFlow::Return { .. } =
                        self.execute_statement(body, env, out)?
                    {
                        return Ok(flow);
                    }
                }
                Ok(ControlFlow::Normal)
            }

            Stmt::Return { value, location } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr, env, out)?,
                    None => Value::Nil,
                };
                Ok(ControlFlow::Return {
                    value,
                    location: *location,
                })
            }
        }
    }

    /// Execute statements in `env` (already the block's own scope),
    /// stopping early on `return`.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: &Environment,
        out: &mut dyn OutputSink,
    ) -> Result<ControlFlow, RuntimeError> {
        for stmt in statements {
            if let flow @ ControlFlow::Return { .. } = self.execute_statement(stmt, env, out)? {
                return Ok(flow);
            }
        }
        Ok(ControlFlow::Normal)
    }
}
