//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into layers:
//!
//! - **[`app`]** — event loop, pane focus, key bindings; routes actions to the session
//! - **[`panes`]** — stateless render functions for each pane (editor, diagnostics,
//!   generated code, interpreter, status bar)
//! - **[`text_input`]** — cursor editing for the editor and the interpreter input
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a session and an initialized
//! [`EngineGateway`] and call [`App::run`] to start the event loop.
//!
//! [`EngineGateway`]: crate::engine::EngineGateway
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod text_input;
pub mod theme;

pub use app::App;
