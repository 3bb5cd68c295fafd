use crate::console::catalog::DEFAULT_PROGRAM;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "loxpad", about = "Interactive Lox script console", version)]
#[command(group(ArgGroup::new("mode").args(["script", "repl", "list"]).multiple(false)))]
pub struct Cli {
    /// Run this file without the console and print its output.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Read and run one line at a time from stdin. Declarations persist between lines.
    #[arg(long)]
    pub repl: bool,

    /// Print the names of the available scripts and exit.
    #[arg(long)]
    pub list: bool,

    /// Script selected when the console starts.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// Directory of extra `.lox` scripts to add after the bundled ones.
    #[arg(long = "scripts-dir", value_name = "DIR", env = "LOXPAD_SCRIPTS")]
    pub scripts_dir: Option<PathBuf>,

    /// Write log output to this file.
    ///
    /// The console never logs to the terminal it draws on; without this
    /// option it does not log at all.
    #[arg(long = "log-file", value_name = "PATH", env = "LOXPAD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
