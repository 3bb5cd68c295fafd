//! The evaluator contract and the bundled Lox evaluator

use std::sync::mpsc::{self, Sender};
use std::thread;

use super::output::OutputSink;
use crate::interpreter::constants::{EVALUATOR_STACK_SIZE, MAX_CALL_DEPTH};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::parse::{ParseError, Parser};

/// Failure reported by an evaluator
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Failure from an evaluator that is not the bundled one
    #[error("{0}")]
    Other(String),
}

impl EvaluationError {
    /// Source line the failure points at, when known
    pub fn line(&self) -> Option<usize> {
        match self {
            EvaluationError::Parse(err) => Some(err.location.line),
            EvaluationError::Runtime(err) => Some(err.location().line),
            EvaluationError::Other(_) => None,
        }
    }
}

/// Something that runs script source and reports output chunk by chunk.
///
/// `evaluate` must call `sink.append` once per chunk, in the order output is
/// produced, and return only after the last call.
pub trait Evaluator {
    fn evaluate(&mut self, source: &str, sink: &mut dyn OutputSink)
        -> Result<(), EvaluationError>;
}

/// Runs Lox source. Each call starts from empty globals.
///
/// Programs run on a worker thread with [`EVALUATOR_STACK_SIZE`] of stack;
/// chunks are relayed to the caller's sink as they are printed.
#[derive(Debug, Clone, Copy)]
pub struct LoxEvaluator {
    max_call_depth: usize,
}

impl LoxEvaluator {
    pub fn new() -> Self {
        LoxEvaluator {
            max_call_depth: MAX_CALL_DEPTH,
        }
    }

    pub fn with_max_call_depth(max_call_depth: usize) -> Self {
        LoxEvaluator { max_call_depth }
    }
}

impl Default for LoxEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for LoxEvaluator {
    fn evaluate(
        &mut self,
        source: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), EvaluationError> {
        let max_call_depth = self.max_call_depth;
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name("lox-eval".to_string())
                .stack_size(EVALUATOR_STACK_SIZE)
                .spawn_scoped(scope, move || {
                    run_program(source, max_call_depth, &mut ChannelSink(tx))
                })
                .map_err(|err| {
                    EvaluationError::Other(format!("failed to start evaluator thread: {}", err))
                })?;

            for chunk in rx {
                sink.append(&chunk);
            }

            worker.join().unwrap_or_else(|_| {
                tracing::error!("evaluator thread panicked");
                Err(EvaluationError::Other("evaluator thread panicked".to_string()))
            })
        })
    }
}

fn run_program(
    source: &str,
    max_call_depth: usize,
    sink: &mut dyn OutputSink,
) -> Result<(), EvaluationError> {
    let program = Parser::new(source)?.parse_program()?;
    let mut interpreter = Interpreter::with_max_call_depth(max_call_depth);
    interpreter.interpret(&program, sink)?;
    Ok(())
}

/// Forwards chunks from the worker thread to the caller
struct ChannelSink(Sender<String>);

impl OutputSink for ChannelSink {
    fn append(&mut self, chunk: &str) {
        // The receiver lives until the worker is joined
        let _ = self.0.send(chunk.to_string());
    }
}
