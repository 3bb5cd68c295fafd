//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **state**: [`editor::EditorBuffer`], [`output::OutputView`] and
//!   [`menu::MenuView`] implement the console's surface traits
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`app`]**: keyboard handling, focus, status line and the event loop
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`ConsoleSession`], call [`App::select`] for the first script, then
//! [`App::run`] to start the event loop.
//!
//! [`ConsoleSession`]: crate::console::session::ConsoleSession
//! [`App::select`]: app::App::select
//! [`App::run`]: app::App::run

pub mod app;
pub mod editor;
pub mod menu;
pub mod output;
pub mod panes;
pub mod theme;

pub use app::App;
