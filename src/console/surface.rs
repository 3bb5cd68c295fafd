//! Display surfaces driven by the console
//!
//! The console never draws anything itself. It talks to the text areas and the
//! script menu through these traits, so the terminal UI and the tests can plug
//! in their own implementations.

/// The user-editable script text
pub trait EditableSurface {
    /// Replace the whole content
    fn set_text(&mut self, text: &str);

    /// Current content, including unsaved edits
    fn text(&self) -> String;
}

/// The read-only output area
pub trait ReadOnlySurface {
    /// Replace the whole content
    fn set_text(&mut self, text: &str);
}

/// The list of scripts the user can switch to
pub trait Menu {
    /// Discard the previous items and show `names`, in order
    fn render(&mut self, names: &[String]);
}

/// A plain string buffer usable as either text surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    writes: usize,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of `set_text` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EditableSurface for TextSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.writes += 1;
    }

    fn text(&self) -> String {
        self.text.clone()
    }
}

impl ReadOnlySurface for TextSurface {
    fn set_text(&mut self, text: &str) {
        EditableSurface::set_text(self, text);
    }
}

/// A menu that only remembers what it was last asked to show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMenu {
    items: Vec<String>,
    renders: usize,
}

impl ListMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of `render` calls so far
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Menu for ListMenu {
    fn render(&mut self, names: &[String]) {
        self.items = names.to_vec();
        self.renders += 1;
    }
}
