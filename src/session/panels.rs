//! Panel projections of a [`PlaygroundSession`]
//!
//! Each function here is pure: it reads the session and decides whether a
//! panel is enabled and what it shows. A disabled panel is only drawn in an
//! inactive style; its content is still computed and nothing about it blocks
//! actions elsewhere.

use super::PlaygroundSession;

/// Editor panel: always enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorView<'a> {
    pub text: &'a str,
}

impl EditorView<'_> {
    pub fn enabled(&self) -> bool {
        true
    }
}

/// Diagnostics panel: enabled while there is at least one error or warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsView {
    pub enabled: bool,
    /// Errors joined by newlines
    pub errors: String,
    /// Warnings joined by newlines
    pub warnings: String,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Generated-code panel: enabled once a compile produced code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeResultView<'a> {
    pub enabled: bool,
    /// Generated code, empty when there is none
    pub code: &'a str,
}

/// Interpreter panel: always enabled for input entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterView<'a> {
    pub input: &'a str,
    pub output: &'a str,
}

impl InterpreterView<'_> {
    pub fn enabled(&self) -> bool {
        true
    }
}

/// All four projections taken from the same session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViews<'a> {
    pub editor: EditorView<'a>,
    pub diagnostics: DiagnosticsView,
    pub code_result: CodeResultView<'a>,
    pub interpreter: InterpreterView<'a>,
}

pub fn editor_view(session: &PlaygroundSession) -> EditorView<'_> {
    EditorView {
        text: session.source_text(),
    }
}

pub fn diagnostics_view(session: &PlaygroundSession) -> DiagnosticsView {
    let diagnostics = session.diagnostics();
    DiagnosticsView {
        enabled: !diagnostics.is_empty(),
        errors: diagnostics.errors.join("\n"),
        warnings: diagnostics.warnings.join("\n"),
        error_count: diagnostics.errors.len(),
        warning_count: diagnostics.warnings.len(),
    }
}

pub fn code_result_view(session: &PlaygroundSession) -> CodeResultView<'_> {
    let output = session.last_compile_output();
    CodeResultView {
        enabled: output.is_some(),
        code: output.unwrap_or(""),
    }
}

pub fn interpreter_view(session: &PlaygroundSession) -> InterpreterView<'_> {
    InterpreterView {
        input: session.interpreter_input(),
        output: session.last_interpreter_output(),
    }
}

/// Project every panel at once
pub fn panel_views(session: &PlaygroundSession) -> PanelViews<'_> {
    PanelViews {
        editor: editor_view(session),
        diagnostics: diagnostics_view(session),
        code_result: code_result_view(session),
        interpreter: interpreter_view(session),
    }
}
