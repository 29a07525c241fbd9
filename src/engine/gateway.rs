//! One-shot initialization guard in front of an [`Engine`]

use super::{CompileResult, Engine, EngineError, InterpreterResult};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Adapter the session talks to
///
/// Owns the engine and a one-shot readiness flag. Created once per process;
/// `initialize` must succeed before any compile or run request.
pub struct EngineGateway<E> {
    engine: E,
    ready: OnceLock<()>,
}

impl<E: Engine> EngineGateway<E> {
    pub fn new(engine: E) -> Self {
        EngineGateway {
            engine,
            ready: OnceLock::new(),
        }
    }

    /// Initialize the engine; calls after the first success are no-ops
    pub fn initialize(&self) -> Result<(), EngineError> {
        if self.is_ready() {
            return Ok(());
        }
        self.engine.initialize()?;
        // Single caller thread, so no other initializer can race us here.
        let _ = self.ready.set(());
        info!("engine initialized");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get().is_some()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn compile_to_target(&self, source: &str) -> Result<CompileResult, EngineError> {
        self.ensure_ready()?;
        debug!(source_len = source.len(), "compile request");
        let result = self.engine.compile_to_target(source)?;
        debug!(
            has_output = result.output_code.is_some(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "compile finished"
        );
        Ok(result)
    }

    pub fn run_interpreter(
        &self,
        source: &str,
        stdin: &str,
    ) -> Result<InterpreterResult, EngineError> {
        self.ensure_ready()?;
        debug!(
            source_len = source.len(),
            stdin_len = stdin.len(),
            "interpreter request"
        );
        let result = self.engine.run_interpreter(source, stdin)?;
        debug!(
            output_len = result.output.len(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "interpreter finished"
        );
        Ok(result)
    }

    fn ensure_ready(&self) -> Result<(), EngineError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(EngineError::NotInitialized)
        }
    }
}
