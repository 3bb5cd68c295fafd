//! The script console
//!
//! - [`catalog`]: named example scripts, fixed after construction
//! - [`selection`]: pushes a chosen script into the editor and rebuilds the menu
//! - [`output`]: chunked output of the current run
//! - [`orchestrator`]: the run pipeline and its `Idle`/`Running` state
//! - [`evaluator`]: the evaluator contract and the bundled Lox evaluator
//! - [`surface`]: traits for the editor, output area and menu
//! - [`session`]: everything above behind one handle
//!
//! # Flow
//!
//! ```text
//! select(name) → editor text, menu items
//! run()        → editor text → Evaluator → OutputSink → OutputBuffer → output surface
//! ```

pub mod catalog;
pub mod errors;
pub mod evaluator;
pub mod orchestrator;
pub mod output;
pub mod selection;
pub mod session;
pub mod surface;

pub use catalog::{ProgramCatalog, ScriptEntry};
pub use errors::ConsoleError;
pub use evaluator::{EvaluationError, Evaluator, LoxEvaluator};
pub use orchestrator::{ExecutionOrchestrator, RunReport, RunState};
pub use output::{OutputBuffer, OutputSink};
pub use selection::SelectionController;
pub use session::ConsoleSession;
pub use surface::{EditableSurface, Menu, ReadOnlySurface};
