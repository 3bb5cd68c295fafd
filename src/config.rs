//! Console configuration assembled from the command line

use crate::cli::Cli;
use crate::console::catalog::{ProgramCatalog, DEFAULT_PROGRAM};
use crate::console::errors::ConsoleError;
use std::path::PathBuf;
use std::time::Duration;

/// How often the terminal host polls for input
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Script selected at startup
    pub initial_program: String,

    /// Extra scripts appended to the bundled catalog
    pub scripts_dir: Option<PathBuf>,

    pub tick_rate: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            initial_program: DEFAULT_PROGRAM.to_string(),
            scripts_dir: None,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl ConsoleConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        ConsoleConfig {
            initial_program: cli.program.clone(),
            scripts_dir: cli.scripts_dir.clone(),
            ..Self::default()
        }
    }

    /// The bundled catalog, plus the scripts directory when one is set
    pub fn build_catalog(&self) -> Result<ProgramCatalog, ConsoleError> {
        let catalog = ProgramCatalog::builtin();
        match &self.scripts_dir {
            Some(dir) => catalog.with_scripts_from(dir),
            None => Ok(catalog),
        }
    }
}
