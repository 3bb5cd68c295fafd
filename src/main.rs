// loxpad: interactive Lox script console

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use loxpad::cli::Cli;
use loxpad::config::ConsoleConfig;
use loxpad::console::evaluator::{EvaluationError, Evaluator, LoxEvaluator};
use loxpad::console::output::OutputSink;
use loxpad::console::session::ConsoleSession;
use loxpad::interpreter::constants::EVALUATOR_STACK_SIZE;
use loxpad::interpreter::engine::Interpreter;
use loxpad::logging::{self, LogTarget};
use loxpad::parser::parse::Parser;
use loxpad::ui::App;

/// sysexits EX_DATAERR
const EXIT_PARSE_ERROR: u8 = 65;
/// sysexits EX_SOFTWARE
const EXIT_RUNTIME_ERROR: u8 = 70;

/// Prints every chunk on its own line as soon as it arrives
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn append(&mut self, chunk: &str) {
        println!("{}", chunk);
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let headless = cli.list || cli.repl || cli.script.is_some();
    let target = match (&cli.log_file, headless) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    logging::init(target).context("failed to open log file")?;

    let config = ConsoleConfig::from_cli(&cli);

    if cli.list {
        let catalog = config.build_catalog()?;
        for name in catalog.names() {
            println!("{}", name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &cli.script {
        return run_file(path);
    }

    if cli.repl {
        // The interpreter recurses natively, so give it the same stack as scripted runs
        thread::Builder::new()
            .name("lox-repl".to_string())
            .stack_size(EVALUATOR_STACK_SIZE)
            .spawn(run_repl)
            .context("failed to start REPL thread")?
            .join()
            .map_err(|_| anyhow!("REPL thread panicked"))??;
        return Ok(ExitCode::SUCCESS);
    }

    run_console(&config)?;
    Ok(ExitCode::SUCCESS)
}

fn run_file(path: &Path) -> Result<ExitCode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    tracing::info!(path = %path.display(), "running script");
    match LoxEvaluator::new().evaluate(&source, &mut StdoutSink) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err @ EvaluationError::Parse(_)) => {
            eprintln!("{}", err);
            Ok(ExitCode::from(EXIT_PARSE_ERROR))
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::from(EXIT_RUNTIME_ERROR))
        }
    }
}

fn run_repl() -> Result<()> {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let program = match Parser::new(&line).and_then(|mut parser| parser.parse_program()) {
            Ok(program) => program,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        if let Err(err) = interpreter.interpret(&program, &mut StdoutSink) {
            eprintln!("{}", err);
        }
    }
}

fn run_console(config: &ConsoleConfig) -> Result<()> {
    let catalog = config.build_catalog()?;
    let session = ConsoleSession::new(catalog, Box::new(LoxEvaluator::new()));
    let mut app = App::new(session, config.tick_rate);
    app.select(&config.initial_program)
        .with_context(|| format!("cannot start with script '{}'", config.initial_program))?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
