//! TUI pane rendering modules
//!
//! - [`editor`]: Script text with Lox highlighting, cursor and error line
//! - [`output`]: Output of the current run
//! - [`menu`]: Popup list of the other scripts
//! - [`status`]: Title row and status bar with keybindings
//!
//! Each module exports plain `render_*` functions that draw from the state
//! types in [`crate::ui`]; none of them hold state of their own.

pub mod editor;
pub mod menu;
pub mod output;
pub mod status;

pub use editor::render_editor_pane;
pub use menu::render_menu_popup;
pub use output::render_output_pane;
pub use status::{render_status_bar, render_title_bar};
