//! Run pipeline
//!
//! [`ExecutionOrchestrator::run`] takes the live editor text, clears the
//! output, and hands the text to an [`Evaluator`]. Every chunk the evaluator
//! emits is appended to the [`OutputBuffer`] and the whole buffer is pushed to
//! the output surface again, so the surface always shows everything produced
//! so far.
//!
//! # Run state
//!
//! ```text
//! Idle --run--> Running --evaluator returns--> Idle
//! ```
//!
//! A `run` that arrives while the state is `Running` is rejected with
//! [`ConsoleError::Busy`] without touching the buffer or any surface.

use super::errors::ConsoleError;
use super::evaluator::Evaluator;
use super::output::{OutputBuffer, OutputSink};
use super::surface::{EditableSurface, ReadOnlySurface};
use std::cell::{Cell, Ref, RefCell};

/// Whether a run is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Number of chunks the evaluator emitted
    pub chunks: usize,
}

/// Puts the state back to `Idle` however the run ends, including unwinding
struct RunGuard<'a> {
    state: &'a Cell<RunState>,
}

impl<'a> RunGuard<'a> {
    fn enter(state: &'a Cell<RunState>) -> Result<Self, ConsoleError> {
        if state.get() == RunState::Running {
            return Err(ConsoleError::Busy);
        }
        state.set(RunState::Running);
        Ok(RunGuard { state })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.state.set(RunState::Idle);
    }
}

/// The sink handed to the evaluator: append, then re-render everything
struct RenderingSink<'a> {
    buffer: &'a RefCell<OutputBuffer>,
    output: &'a mut dyn ReadOnlySurface,
}

impl OutputSink for RenderingSink<'_> {
    fn append(&mut self, chunk: &str) {
        let rendered = {
            let mut buffer = self.buffer.borrow_mut();
            buffer.push(chunk);
            buffer.render()
        };
        tracing::trace!(chunk, "output chunk");
        self.output.set_text(&rendered);
    }
}

/// Owns the output buffer and the run state for one console session.
///
/// `run` takes `&self` so the orchestrator can be shared (for example behind
/// an `Rc`) and still refuse a second run started from inside the first.
#[derive(Debug, Default)]
pub struct ExecutionOrchestrator {
    buffer: RefCell<OutputBuffer>,
    state: Cell<RunState>,
    runs: Cell<u64>,
}

impl ExecutionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the editor's current text, streaming output to `output`.
    ///
    /// The buffer and the output surface are cleared before the evaluator is
    /// called. If the evaluator fails, whatever it emitted first stays in the
    /// buffer and on the surface, and the failure is returned as
    /// [`ConsoleError::Evaluation`].
    pub fn run(
        &self,
        editor: &dyn EditableSurface,
        output: &mut dyn ReadOnlySurface,
        evaluator: &mut dyn Evaluator,
    ) -> Result<RunReport, ConsoleError> {
        let _guard = match RunGuard::enter(&self.state) {
            Ok(guard) => guard,
            Err(err) => {
                tracing::warn!("run rejected: another run is in progress");
                return Err(err);
            }
        };

        let run_id = self.runs.get() + 1;
        self.runs.set(run_id);

        let source = editor.text();
        self.buffer.borrow_mut().reset();
        output.set_text("");

        let span = tracing::info_span!("run", id = run_id, bytes = source.len());
        let _entered = span.enter();
        tracing::info!("run started");

        let result = {
            let mut sink = RenderingSink {
                buffer: &self.buffer,
                output,
            };
            evaluator.evaluate(&source, &mut sink)
        };

        let chunks = self.buffer.borrow().len();
        match result {
            Ok(()) => {
                tracing::info!(chunks, "run finished");
                Ok(RunReport { chunks })
            }
            Err(err) => {
                tracing::error!(chunks, error = %err, "run failed");
                Err(ConsoleError::Evaluation(err))
            }
        }
    }

    pub fn state(&self) -> RunState {
        self.state.get()
    }

    pub fn is_running(&self) -> bool {
        self.state.get() == RunState::Running
    }

    /// Output of the current (or last) run
    pub fn buffer(&self) -> Ref<'_, OutputBuffer> {
        self.buffer.borrow()
    }

    /// Number of runs started so far
    pub fn run_count(&self) -> u64 {
        self.runs.get()
    }
}
