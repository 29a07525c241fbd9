//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over a read-only projection
//! from [`crate::session::panels`]; the only state a pane keeps is its own
//! scroll position, owned by the app.
//!
//! # Pane Modules
//!
//! - [`editor`]: Source editor with IsiLang highlighting and the example picker
//! - [`diagnostics`]: Errors and warnings from the last engine call
//! - [`code_result`]: C code generated by the last compile
//! - [`interpreter`]: Interpreter stdin and the output of the last run
//! - [`status`]: Status bar with keybindings and the last action's outcome
//! - `utils`: Window frame with focus/inactive styling, scroll helpers

mod utils;

pub mod code_result;
pub mod diagnostics;
pub mod editor;
pub mod interpreter;
pub mod status;

// Re-export render functions for convenience
pub use code_result::render_code_result_pane;
pub use diagnostics::render_diagnostics_pane;
pub use editor::render_editor_pane;
pub use interpreter::{render_interpreter_pane, InterpreterScrollState};
pub use status::{render_status_bar, StatusKind};
