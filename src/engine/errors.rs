//! Engine failure types
//!
//! [`EngineError`] covers the cases where the engine could not be reached or
//! set up. Diagnostics about the user's program never use this type.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Compile or run was requested before a successful `initialize()`
    #[error("engine used before initialization")]
    NotInitialized,

    /// The engine program could not be started
    #[error("failed to launch engine '{}': {source}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The startup probe ran but reported failure
    #[error("engine '{}' failed its startup probe ({status})", program.display())]
    Probe { program: PathBuf, status: ExitStatus },

    /// Scratch files for a request could not be prepared or read back
    #[error("engine scratch I/O failed: {0}")]
    Scratch(#[from] io::Error),
}
