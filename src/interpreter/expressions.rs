//! Expression evaluation implementation
//!
//! Evaluates [`Expr`] nodes to [`Value`]s:
//!
//! - Literals, variable reads and assignment
//! - Unary `-` and `!`
//! - Arithmetic and comparison on numbers, `+` on two strings
//! - Equality on any pair of values
//! - Short-circuit `and` / `or`, which yield one of their operands
//! - Calls to user functions, with arity and call depth checks
//!
//! Evaluation takes the output sink because a call may run `print`
//! statements inside the callee.

use crate::console::output::OutputSink;
use crate::interpreter::engine::{ControlFlow, Interpreter};
use crate::interpreter::errors::RuntimeError;
use crate::memory::environment::Environment;
use crate::memory::value::Value;
use crate::parser::ast::*;
use std::rc::Rc;

impl Interpreter {
    pub(crate) fn evaluate(
        &mut self,
        expr: &Expr,
        env: &Environment,
        out: &mut dyn OutputSink,
    ) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal, _) => Ok(match literal {
                Literal::Number(n) => Value::Number(*n),
                Literal::String(s) => Value::from(s.as_str()),
                Literal::Bool(b) => Value::Bool(*b),
                Literal::Nil => Value::Nil,
            }),

            Expr::Variable { name, location } => {
                env.get(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable {
                        name: name.clone(),
                        location: *location,
                    })
            }

            Expr::Assign {
                name,
                value,
                location,
            } => {
                let value = self.evaluate(value, env, out)?;
                if env.assign(name, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::UndeclaredAssignment {
                        name: name.clone(),
                        location: *location,
                    })
                }
            }

            Expr::Grouping(inner) => self.evaluate(inner, env, out),

            Expr::Unary {
                op,
                operand,
                location,
            } => {
                let value = self.evaluate(operand, env, out)?;
                match op {
                    UnOp::Not => Ok(Value::Bool(!value.is_truthy())),
                    UnOp::Neg => match value {
                        Value::Number(n) => Ok(Value::Number(-n)),
                        other => Err(RuntimeError::TypeError {
                            message: format!(
                                "Operand of '-' must be a number, got {}",
                                other.type_name()
                            ),
                            location: *location,
                        }),
                    },
                }
            }

            Expr::Binary {
                op,
                left,
                right,
                location,
            } => {
                let lhs = self.evaluate(left, env, out)?;
                let rhs = self.evaluate(right, env, out)?;
                binary_op(*op, lhs, rhs, *location)
            }

            Expr::Logical {
                op, left, right, ..
            } => {
                let lhs = self.evaluate(left, env, out)?;
                let short_circuits = match op {
                    LogicalOp::Or => lhs.is_truthy(),
                    LogicalOp::And => !lhs.is_truthy(),
                };
                if short_circuits {
                    Ok(lhs)
                } else {
                    self.evaluate(right, env, out)
                }
            }

            Expr::Call {
                callee,
                args,
                location,
            } => self.evaluate_call(callee, args, *location, env, out),
        }
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        location: SourceLocation,
        env: &Environment,
        out: &mut dyn OutputSink,
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee, env, out)?;

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.evaluate(arg, env, out)?);
        }

        let function = match callee {
            Value::Function(function) => function,
            other => {
                return Err(RuntimeError::NotCallable {
                    got: other.type_name().to_string(),
                    location,
                });
            }
        };

        if arg_values.len() != function.arity() {
            return Err(RuntimeError::ArgumentCountMismatch {
                function: function.name().to_string(),
                expected: function.arity(),
                got: arg_values.len(),
                location,
            });
        }

        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::StackOverflow {
                limit: self.max_call_depth,
                location,
            });
        }

        let call_env = function.closure.child();
        for (param, value) in function.decl.params.iter().zip(arg_values) {
            call_env.define(param, value);
        }

        let decl = Rc::clone(&function.decl);
        self.call_depth += 1;
        let result = self.execute_block(&decl.body, &call_env, out);
        self.call_depth -= 1;

        match result? {
            ControlFlow::Return { value, .. } => Ok(value),
            ControlFlow::Normal => Ok(Value::Nil),
        }
    }
}

/// Apply an arithmetic, comparison or equality operator
fn binary_op(
    op: BinOp,
    lhs: Value,
    rhs: Value,
    location: SourceLocation,
) -> Result<Value, RuntimeError> {
    match op {
        BinOp::Eq => return Ok(Value::Bool(lhs == rhs)),
        BinOp::Ne => return Ok(Value::Bool(lhs != rhs)),
        _ => {}
    }

    if let (BinOp::Add, Value::Str(a), Value::Str(b)) = (op, &lhs, &rhs) {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        return Ok(Value::from(joined.as_str()));
    }

    let (a, b) = match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            let message = if op == BinOp::Add {
                format!(
                    "Operands of '+' must be two numbers or two strings, got {} and {}",
                    lhs.type_name(),
                    rhs.type_name()
                )
            } else {
                format!(
                    "Operands of '{}' must be numbers, got {} and {}",
                    op.symbol(),
                    lhs.type_name(),
                    rhs.type_name()
                )
            };
            return Err(RuntimeError::TypeError { message, location });
        }
    };

    Ok(match op {
        BinOp::Add => Value::Number(a + b),
        BinOp::Sub => Value::Number(a - b),
        BinOp::Mul => Value::Number(a * b),
        BinOp::Div => Value::Number(a / b),
        BinOp::Lt => Value::Bool(a < b),
        BinOp::Le => Value::Bool(a <= b),
        BinOp::Gt => Value::Bool(a > b),
        BinOp::Ge => Value::Bool(a >= b),
        BinOp::Eq => Value::Bool(a == b),
        BinOp::Ne => Value::Bool(a != b),
    })
}
