//! Script menu state

use crate::console::surface::Menu;

/// The popup listing the scripts that are not currently selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuView {
    items: Vec<String>,
    selected: usize,
    open: bool,
}

impl MenuView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Name under the highlight, `None` when the menu is empty
    pub fn selected_name(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }
}

impl Menu for MenuView {
    fn render(&mut self, names: &[String]) {
        self.items = names.to_vec();
        self.selected = 0;
    }
}
