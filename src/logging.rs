//! Logging setup on top of `tracing-subscriber`
//!
//! The interactive playground owns the terminal, so it only logs when a log
//! file is configured. Headless commands fall back to stderr.
//!
//! `RUST_LOG` directives refine the level chosen from `-v` flags.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// When set, logs are appended to this file
    pub log_file: Option<PathBuf>,
}

/// Where logs go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFallback {
    Stderr,
    Discard,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: Level::WARN,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level: none is warn, then info, debug, trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        LogConfig {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig, fallback: LogFallback) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        install(config, Mutex::new(file), false)
    } else {
        match fallback {
            LogFallback::Stderr => install(config, io::stderr, true),
            LogFallback::Discard => Ok(()),
        }
    }
}

fn install<W>(config: &LogConfig, writer: W, ansi: bool) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(io::Error::other)
}
