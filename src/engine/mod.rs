//! Boundary to the external IsiLang compiler/interpreter
//!
//! The playground never parses, checks or executes IsiLang itself. Everything
//! language-specific happens behind the [`Engine`] trait:
//!
//! - [`gateway`]: [`EngineGateway`], the one-shot initialization guard that
//!   the session talks to
//! - [`process`]: [`ProcessEngine`], which drives the `isic` command line
//!   compiler as a child process
//! - [`errors`]: [`EngineError`], failures to reach the engine at all
//!
//! Invalid programs are *not* engine failures: they come back as `Ok` results
//! with a non-empty `errors` list.

pub mod errors;
pub mod gateway;
pub mod process;

pub use errors::EngineError;
pub use gateway::EngineGateway;
pub use process::ProcessEngine;

/// Outcome of compiling a program to C
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileResult {
    /// Generated code, absent when compilation produced no artifact
    pub output_code: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Outcome of interpreting a program against a fixed stdin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpreterResult {
    pub output: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// An IsiLang compiler/interpreter
///
/// Implementations are stateless per call once initialized. `initialize` is
/// invoked through [`EngineGateway`], which guarantees it runs at most once
/// successfully.
pub trait Engine {
    /// One-time setup; an error here is fatal for the session
    fn initialize(&self) -> Result<(), EngineError>;

    /// Compile `source` to C
    fn compile_to_target(&self, source: &str) -> Result<CompileResult, EngineError>;

    /// Interpret `source`, with `stdin` as the complete input stream
    fn run_interpreter(
        &self,
        source: &str,
        stdin: &str,
    ) -> Result<InterpreterResult, EngineError>;
}
