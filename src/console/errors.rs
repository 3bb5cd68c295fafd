//! Error types for the console layer

use super::evaluator::EvaluationError;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by the catalog, the selection controller and the run pipeline.
///
/// None of these are recovered from locally; each is returned to the caller
/// with no partial effect, except that output already rendered by a failed
/// run stays rendered.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Lookup or selection of a name that is not in the catalog
    #[error("no script named '{0}' in the catalog")]
    NotFound(String),

    /// Catalog construction with a repeated name
    #[error("duplicate script name '{0}'")]
    DuplicateName(String),

    /// `run` requested while another run is still in flight
    #[error("a run is already in progress")]
    Busy,

    /// The evaluator reported a failure
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// Reading extra scripts from disk failed
    #[error("failed to load scripts from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
