//! The playground session: the single owner of editor text, inputs, outputs
//! and diagnostics
//!
//! Every user action maps to one transition on [`PlaygroundSession`]. The two
//! engine-backed transitions, [`compile`](PlaygroundSession::compile) and
//! [`run`](PlaygroundSession::run), write the diagnostics and their output
//! field in one `&mut self` step, so anything reading the session afterwards
//! sees a result that belongs together.
//!
//! Panels never hold copies of this state; they read projections computed by
//! [`panels`].

pub mod panels;

use crate::catalog::ExampleCatalog;
use crate::engine::{CompileResult, Engine, EngineError, EngineGateway, InterpreterResult};
use tracing::{debug, info};

/// Errors and warnings from the most recent engine call, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSet {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl DiagnosticSet {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        DiagnosticSet { errors, warnings }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Aggregate root of the playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundSession {
    source_text: String,
    interpreter_input: String,
    last_compile_output: Option<String>,
    last_interpreter_output: String,
    diagnostics: DiagnosticSet,
}

impl PlaygroundSession {
    /// Fresh session with the given editor text and nothing else
    pub fn new(source_text: impl Into<String>) -> Self {
        PlaygroundSession {
            source_text: source_text.into(),
            interpreter_input: String::new(),
            last_compile_output: None,
            last_interpreter_output: String::new(),
            diagnostics: DiagnosticSet::default(),
        }
    }

    /// Fresh session seeded with the catalog's default example
    pub fn with_default_example(catalog: &ExampleCatalog) -> Self {
        let text = catalog
            .get(catalog.default_example())
            .unwrap_or_default();
        Self::new(text)
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn interpreter_input(&self) -> &str {
        &self.interpreter_input
    }

    pub fn last_compile_output(&self) -> Option<&str> {
        self.last_compile_output.as_deref()
    }

    pub fn last_interpreter_output(&self) -> &str {
        &self.last_interpreter_output
    }

    pub fn diagnostics(&self) -> &DiagnosticSet {
        &self.diagnostics
    }

    /// Replace the editor text; outputs and diagnostics are left as they were
    pub fn edit_source(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Replace the editor text with a catalog example
    ///
    /// Unknown names leave the session untouched. Returns whether the name
    /// was found.
    pub fn load_example(&mut self, catalog: &ExampleCatalog, name: &str) -> bool {
        match catalog.lookup(name) {
            Some(text) => {
                info!(example = name, "loaded example");
                self.source_text = text.to_string();
                true
            }
            None => {
                debug!(example = name, "ignored unknown example");
                false
            }
        }
    }

    /// Replace the stdin used by the next interpreter run
    pub fn set_interpreter_input(&mut self, text: impl Into<String>) {
        self.interpreter_input = text.into();
    }

    /// Compile the current text and take over the result
    ///
    /// On `Err` the engine was never reached and the session is unchanged.
    pub fn compile<E: Engine>(&mut self, gateway: &EngineGateway<E>) -> Result<(), EngineError> {
        let result = gateway.compile_to_target(&self.source_text)?;
        self.apply_compile_result(result);
        Ok(())
    }

    /// Interpret the current text against the current input and take over the result
    ///
    /// On `Err` the engine was never reached and the session is unchanged.
    pub fn run<E: Engine>(&mut self, gateway: &EngineGateway<E>) -> Result<(), EngineError> {
        let result = gateway.run_interpreter(&self.source_text, &self.interpreter_input)?;
        self.apply_interpreter_result(result);
        Ok(())
    }

    /// Replace the compile output and the diagnostics together
    pub fn apply_compile_result(&mut self, result: CompileResult) {
        let CompileResult {
            output_code,
            errors,
            warnings,
        } = result;
        self.last_compile_output = output_code;
        self.diagnostics = DiagnosticSet::new(errors, warnings);
    }

    /// Replace the interpreter output and the diagnostics together
    pub fn apply_interpreter_result(&mut self, result: InterpreterResult) {
        let InterpreterResult {
            output,
            errors,
            warnings,
        } = result;
        self.last_interpreter_output = output;
        self.diagnostics = DiagnosticSet::new(errors, warnings);
    }
}
