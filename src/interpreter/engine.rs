// Execution engine for the Lox interpreter

use crate::console::output::OutputSink;
use crate::interpreter::constants::MAX_CALL_DEPTH;
use crate::interpreter::errors::RuntimeError;
use crate::memory::environment::Environment;
use crate::memory::value::Value;
use crate::parser::ast::{Program, SourceLocation};

/// How a statement finished
#[derive(Debug)]
pub(crate) enum ControlFlow {
    Normal,
    Return {
        value: Value,
        location: SourceLocation,
    },
}

/// The tree-walking interpreter.
///
/// Globals live as long as the interpreter, so successive calls to
/// [`Interpreter::interpret`] see each other's declarations. Create a fresh
/// interpreter for an isolated run.
pub struct Interpreter {
    /// Outermost scope
    globals: Environment,

    /// Current function call nesting
    pub(crate) call_depth: usize,

    /// Call nesting limit
    pub(crate) max_call_depth: usize,
}

impl Interpreter {
    /// Create an interpreter with empty globals
    pub fn new() -> Self {
        Self::with_max_call_depth(MAX_CALL_DEPTH)
    }

    /// Create an interpreter with a custom call nesting limit
    pub fn with_max_call_depth(max_call_depth: usize) -> Self {
        Interpreter {
            globals: Environment::new(),
            call_depth: 0,
            max_call_depth,
        }
    }

    /// Run every top-level statement in order, sending `print` output to `out`.
    ///
    /// Execution stops at the first runtime error; anything already printed
    /// stays printed.
    pub fn interpret(
        &mut self,
        program: &Program,
        out: &mut dyn OutputSink,
    ) -> Result<(), RuntimeError> {
        let globals = self.globals.clone();
        self.call_depth = 0;

        for stmt in &program.statements {
            match self.execute_statement(stmt, &globals, out)? {
                ControlFlow::Normal => {}
                ControlFlow::Return { location, .. } => {
                    return Err(RuntimeError::ReturnOutsideFunction { location });
                }
            }
        }

        Ok(())
    }

    /// The global scope
    pub fn globals(&self) -> &Environment {
        &self.globals
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
