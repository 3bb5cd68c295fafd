//! One console session: a catalog, the current selection and the run pipeline

use super::catalog::ProgramCatalog;
use super::errors::ConsoleError;
use super::evaluator::Evaluator;
use super::orchestrator::{ExecutionOrchestrator, RunReport, RunState};
use super::output::OutputBuffer;
use super::selection::SelectionController;
use super::surface::{EditableSurface, Menu, ReadOnlySurface};
use std::cell::Ref;
use std::rc::Rc;

/// Ties selection and execution together for a host that owns the surfaces.
///
/// The session never holds the surfaces; the host passes them into each
/// operation, which keeps the terminal UI free to borrow them for drawing in
/// between.
pub struct ConsoleSession {
    selection: SelectionController,
    orchestrator: ExecutionOrchestrator,
    evaluator: Box<dyn Evaluator>,
}

impl ConsoleSession {
    pub fn new(catalog: ProgramCatalog, evaluator: Box<dyn Evaluator>) -> Self {
        ConsoleSession {
            selection: SelectionController::new(Rc::new(catalog)),
            orchestrator: ExecutionOrchestrator::new(),
            evaluator,
        }
    }

    /// Load `name` into the editor and refresh the menu
    pub fn select(
        &mut self,
        name: &str,
        editor: &mut dyn EditableSurface,
        menu: &mut dyn Menu,
    ) -> Result<(), ConsoleError> {
        self.selection.select(name, editor, menu)
    }

    /// Run whatever the editor holds right now
    pub fn run(
        &mut self,
        editor: &dyn EditableSurface,
        output: &mut dyn ReadOnlySurface,
    ) -> Result<RunReport, ConsoleError> {
        self.orchestrator
            .run(editor, output, self.evaluator.as_mut())
    }

    pub fn current(&self) -> Option<&str> {
        self.selection.current()
    }

    pub fn alternatives(&self) -> &[String] {
        self.selection.alternatives()
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        self.selection.catalog()
    }

    /// Output of the current (or last) run
    pub fn output(&self) -> Ref<'_, OutputBuffer> {
        self.orchestrator.buffer()
    }

    pub fn state(&self) -> RunState {
        self.orchestrator.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::evaluator::{EvaluationError, LoxEvaluator};
    use crate::console::surface::{ListMenu, TextSurface};

    fn session() -> ConsoleSession {
        ConsoleSession::new(ProgramCatalog::builtin(), Box::new(LoxEvaluator::new()))
    }

    #[test]
    fn test_select_then_run_hello_world() {
        let mut session = session();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        let mut output = TextSurface::new();

        session.select("Hello World", &mut editor, &mut menu).unwrap();
        assert_eq!(
            session.alternatives(),
            &["Loops", "Fibonacci", "Factors", "Closures"]
        );

        let report = session.run(&editor, &mut output).unwrap();
        assert_eq!(report.chunks, 1);
        assert_eq!(output.as_str(), "Hello World!");
    }

    #[test]
    fn test_run_uses_edited_text_without_touching_catalog() {
        let mut session = session();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        let mut output = TextSurface::new();
        session.select("Hello World", &mut editor, &mut menu).unwrap();

        EditableSurface::set_text(&mut editor, "print 1; print 2;");
        session.run(&editor, &mut output).unwrap();

        assert_eq!(output.as_str(), "1\n2");
        assert_eq!(
            session.catalog().get("Hello World").unwrap(),
            r#"print "Hello World!";"#
        );
    }

    #[test]
    fn test_runtime_error_leaves_partial_output() {
        let mut session = session();
        let mut editor = TextSurface::new();
        let mut output = TextSurface::new();
        EditableSurface::set_text(&mut editor, "print 1;\nprint 1 + nil;");

        let err = session.run(&editor, &mut output).unwrap_err();

        assert!(matches!(
            err,
            ConsoleError::Evaluation(EvaluationError::Runtime(_))
        ));
        assert_eq!(output.as_str(), "1");
        assert_eq!(session.output().chunks(), &["1"]);
        assert_eq!(session.state(), RunState::Idle);
    }

    #[test]
    fn test_unknown_selection_keeps_previous() {
        let mut session = session();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        session.select("Loops", &mut editor, &mut menu).unwrap();

        let err = session.select("Nope", &mut editor, &mut menu).unwrap_err();

        assert!(matches!(err, ConsoleError::NotFound(_)));
        assert_eq!(session.current(), Some("Loops"));
    }

    #[test]
    fn test_run_before_any_selection() {
        let mut session = session();
        let editor = TextSurface::new();
        let mut output = TextSurface::new();

        let report = session.run(&editor, &mut output).unwrap();

        assert_eq!(report.chunks, 0);
        assert_eq!(output.as_str(), "");
        assert_eq!(session.current(), None);
    }
}
