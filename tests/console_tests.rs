// Integration tests for the script console: catalog, selection and runs

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use loxpad::console::{
    ConsoleError, ConsoleSession, EditableSurface, EvaluationError, Evaluator, LoxEvaluator,
    OutputSink, ProgramCatalog, ReadOnlySurface, RunState, ScriptEntry,
};
use loxpad::console::surface::{ListMenu, TextSurface};

fn session() -> ConsoleSession {
    ConsoleSession::new(ProgramCatalog::builtin(), Box::new(LoxEvaluator::new()))
}

/// Output surface that keeps every text it was given
#[derive(Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl ReadOnlySurface for Recorder {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

#[test]
fn test_hello_world_scenario() {
    let mut session = session();
    let mut editor = TextSurface::new();
    let mut menu = ListMenu::new();
    let mut output = TextSurface::new();

    session.select("Hello World", &mut editor, &mut menu).unwrap();

    assert_eq!(editor.as_str(), r#"print "Hello World!";"#);
    assert_eq!(menu.items(), &["Loops", "Fibonacci", "Factors", "Closures"]);

    session.run(&editor, &mut output).unwrap();
    assert_eq!(output.as_str(), "Hello World!");
}

#[test]
fn test_every_builtin_selects_and_runs() {
    let mut session = session();
    let names: Vec<String> = session.catalog().names().map(str::to_string).collect();

    for name in &names {
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        let mut output = TextSurface::new();

        session.select(name, &mut editor, &mut menu).unwrap();
        let report = session.run(&editor, &mut output).unwrap();

        assert!(report.chunks > 0, "{} printed nothing", name);
        assert_eq!(output.as_str(), session.output().render());
        assert_eq!(session.state(), RunState::Idle);
    }
}

#[test]
fn test_output_is_rerendered_per_chunk() {
    let mut session = session();
    let mut editor = TextSurface::new();
    EditableSurface::set_text(&mut editor, "print 1; print 2; print 3;");
    let history = Rc::new(RefCell::new(Vec::new()));
    let mut output = Recorder(Rc::clone(&history));

    session.run(&editor, &mut output).unwrap();

    assert_eq!(*history.borrow(), vec!["", "1", "1\n2", "1\n2\n3"]);
}

#[test]
fn test_second_run_replaces_first() {
    let mut session = session();
    let mut editor = TextSurface::new();
    let mut menu = ListMenu::new();
    let mut output = TextSurface::new();

    session.select("Factors", &mut editor, &mut menu).unwrap();
    session.run(&editor, &mut output).unwrap();
    session.select("Fibonacci", &mut editor, &mut menu).unwrap();
    session.run(&editor, &mut output).unwrap();

    assert_eq!(output.as_str(), "6765");
}

#[test]
fn test_parse_error_clears_output_and_reports() {
    let mut session = session();
    let mut editor = TextSurface::new();
    let mut output = TextSurface::new();
    EditableSurface::set_text(&mut editor, "print 1;");
    session.run(&editor, &mut output).unwrap();

    EditableSurface::set_text(&mut editor, "print (1;");
    let err = session.run(&editor, &mut output).unwrap_err();

    assert!(matches!(
        err,
        ConsoleError::Evaluation(EvaluationError::Parse(_))
    ));
    assert_eq!(output.as_str(), "");
    assert!(session.output().is_empty());
}

/// An evaluator that fails after emitting some output
struct FailingEvaluator;

impl Evaluator for FailingEvaluator {
    fn evaluate(&mut self, _source: &str, sink: &mut dyn OutputSink) -> Result<(), EvaluationError> {
        sink.append("first");
        sink.append("second");
        Err(EvaluationError::Other("backend unavailable".to_string()))
    }
}

#[test]
fn test_custom_evaluator_failure() {
    let mut session = ConsoleSession::new(ProgramCatalog::builtin(), Box::new(FailingEvaluator));
    let editor = TextSurface::new();
    let mut output = TextSurface::new();

    let err = session.run(&editor, &mut output).unwrap_err();

    assert_eq!(err.to_string(), "backend unavailable");
    assert_eq!(output.as_str(), "first\nsecond");
    assert_eq!(session.state(), RunState::Idle);
}

#[test]
fn test_catalog_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b_second.lox"), "print \"b\";").unwrap();
    fs::write(dir.path().join("a_first.lox"), "print \"a\";").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let catalog = ProgramCatalog::new(vec![ScriptEntry::new("Main", "print 0;")])
        .unwrap()
        .with_scripts_from(dir.path())
        .unwrap();

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Main", "a_first", "b_second"]);

    let mut session = ConsoleSession::new(catalog, Box::new(LoxEvaluator::new()));
    let mut editor = TextSurface::new();
    let mut menu = ListMenu::new();
    let mut output = TextSurface::new();
    session.select("b_second", &mut editor, &mut menu).unwrap();
    session.run(&editor, &mut output).unwrap();

    assert_eq!(menu.items(), &["Main", "a_first"]);
    assert_eq!(output.as_str(), "b");
}

#[test]
fn test_directory_name_clash_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Loops.lox"), "print 1;").unwrap();

    let result = ProgramCatalog::builtin().with_scripts_from(dir.path());

    assert!(matches!(result, Err(ConsoleError::DuplicateName(name)) if name == "Loops"));
}

#[test]
fn test_runaway_recursion_reports_overflow() {
    let mut session = session();
    let mut editor = TextSurface::new();
    let mut output = TextSurface::new();
    EditableSurface::set_text(&mut editor, "fun f(n) { return f(n + 1); }\nf(0);");

    let err = session.run(&editor, &mut output).unwrap_err();

    assert!(matches!(
        err,
        ConsoleError::Evaluation(EvaluationError::Runtime(
            loxpad::interpreter::errors::RuntimeError::StackOverflow { limit: 256, .. }
        ))
    ));
    assert_eq!(session.state(), RunState::Idle);
}
