//! Read-only output area state

use crate::console::surface::ReadOnlySurface;

/// Text pushed by the run pipeline plus a scroll offset.
///
/// Every `set_text` pins the view to the bottom; the renderer clamps
/// `scroll` to the real maximum once it knows the pane height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputView {
    text: String,
    pub scroll: usize,
}

impl OutputView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Display lines; empty when there is no output at all
    pub fn lines(&self) -> Vec<&str> {
        if self.text.is_empty() {
            Vec::new()
        } else {
            self.text.split('\n').collect()
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_add(amount);
    }
}

impl ReadOnlySurface for OutputView {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.scroll = usize::MAX;
    }
}
