//! Script selection
//!
//! [`SelectionController`] owns the name of the selected script. Selecting a
//! script loads its source into the editor, overwriting any edits, and rebuilds
//! the menu from scratch with every other script in catalog order.

use super::catalog::ProgramCatalog;
use super::errors::ConsoleError;
use super::surface::{EditableSurface, Menu};
use std::rc::Rc;

pub struct SelectionController {
    catalog: Rc<ProgramCatalog>,
    current: Option<String>,
    alternatives: Vec<String>,
}

impl SelectionController {
    /// Nothing is selected until the host makes the first `select` call
    pub fn new(catalog: Rc<ProgramCatalog>) -> Self {
        SelectionController {
            catalog,
            current: None,
            alternatives: Vec::new(),
        }
    }

    /// Make `name` the current script.
    ///
    /// On success the editor holds exactly the catalog source for `name` and
    /// the menu shows every other name. An unknown name fails with
    /// [`ConsoleError::NotFound`] before anything is touched.
    pub fn select(
        &mut self,
        name: &str,
        editor: &mut dyn EditableSurface,
        menu: &mut dyn Menu,
    ) -> Result<(), ConsoleError> {
        let source = match self.catalog.get(name) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(name, "selection rejected: unknown script");
                return Err(err);
            }
        };

        self.current = Some(name.to_string());
        editor.set_text(source);
        self.alternatives = self
            .catalog
            .names()
            .filter(|candidate| *candidate != name)
            .map(str::to_string)
            .collect();
        menu.render(&self.alternatives);

        tracing::info!(
            name,
            alternatives = self.alternatives.len(),
            "script selected"
        );
        Ok(())
    }

    /// The selected name, `None` before the first selection
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Names offered by the menu after the last selection
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::catalog::ScriptEntry;
    use crate::console::surface::{ListMenu, TextSurface};

    fn controller() -> SelectionController {
        SelectionController::new(Rc::new(ProgramCatalog::builtin()))
    }

    #[test]
    fn test_nothing_selected_initially() {
        let controller = controller();
        assert_eq!(controller.current(), None);
        assert!(controller.alternatives().is_empty());
    }

    #[test]
    fn test_select_loads_source_and_alternatives() {
        let mut controller = controller();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();

        controller.select("Fibonacci", &mut editor, &mut menu).unwrap();

        assert_eq!(controller.current(), Some("Fibonacci"));
        assert_eq!(
            editor.as_str(),
            controller.catalog().get("Fibonacci").unwrap()
        );
        assert_eq!(
            controller.alternatives(),
            &["Hello World", "Loops", "Factors", "Closures"]
        );
        assert_eq!(menu.items(), controller.alternatives());
    }

    #[test]
    fn test_every_name_round_trips_through_editor() {
        let mut controller = controller();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        let names: Vec<String> = controller.catalog().names().map(str::to_string).collect();

        for name in &names {
            controller.select(name, &mut editor, &mut menu).unwrap();
            assert_eq!(editor.as_str(), controller.catalog().get(name).unwrap());
            assert!(!controller.alternatives().contains(name));
            assert_eq!(controller.alternatives().len(), names.len() - 1);
        }
    }

    #[test]
    fn test_unknown_name_changes_nothing() {
        let mut controller = controller();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        controller.select("Loops", &mut editor, &mut menu).unwrap();
        EditableSurface::set_text(&mut editor, "print 42;");
        let writes = editor.writes();
        let renders = menu.renders();

        let err = controller
            .select("Missing", &mut editor, &mut menu)
            .unwrap_err();

        assert!(matches!(err, ConsoleError::NotFound(ref name) if name == "Missing"));
        assert_eq!(controller.current(), Some("Loops"));
        assert_eq!(editor.as_str(), "print 42;");
        assert_eq!(editor.writes(), writes);
        assert_eq!(menu.renders(), renders);
        assert!(!controller.alternatives().iter().any(|n| n == "Loops"));
    }

    #[test]
    fn test_reselect_discards_edits() {
        let mut controller = controller();
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();
        controller.select("Hello World", &mut editor, &mut menu).unwrap();
        let alternatives = controller.alternatives().to_vec();

        EditableSurface::set_text(&mut editor, "print 1;");
        controller.select("Hello World", &mut editor, &mut menu).unwrap();

        assert_eq!(editor.as_str(), r#"print "Hello World!";"#);
        assert_eq!(controller.alternatives(), alternatives.as_slice());
        assert_eq!(menu.renders(), 2);
    }

    #[test]
    fn test_single_entry_catalog_has_no_alternatives() {
        let catalog = ProgramCatalog::new(vec![ScriptEntry::new("only", "print 1;")]).unwrap();
        let mut controller = SelectionController::new(Rc::new(catalog));
        let mut editor = TextSurface::new();
        let mut menu = ListMenu::new();

        controller.select("only", &mut editor, &mut menu).unwrap();
        assert!(controller.alternatives().is_empty());
        assert!(menu.items().is_empty());
        assert_eq!(menu.renders(), 1);
    }
}
