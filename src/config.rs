//! Playground configuration assembled from the command line

use crate::catalog::{ExampleCatalog, ExampleName};
use crate::cli::Cli;
use crate::logging::LogConfig;
use crate::session::PlaygroundSession;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the editor's first text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSource {
    Example(ExampleName),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    pub engine_program: PathBuf,
    pub initial_source: InitialSource,
    pub interpreter_input: Option<PathBuf>,
    pub log: LogConfig,
}

impl PlaygroundConfig {
    pub fn from_cli(cli: &Cli, catalog: &ExampleCatalog) -> Self {
        let initial_source = match (&cli.file, cli.example) {
            (Some(path), _) => InitialSource::File(path.clone()),
            (None, Some(name)) => InitialSource::Example(name),
            (None, None) => InitialSource::Example(catalog.default_example()),
        };

        PlaygroundConfig {
            engine_program: cli.engine.clone(),
            initial_source,
            interpreter_input: cli.input.clone(),
            log: LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone()),
        }
    }

    /// Example selected in the picker at startup
    pub fn initial_example(&self, catalog: &ExampleCatalog) -> ExampleName {
        match self.initial_source {
            InitialSource::Example(name) => name,
            InitialSource::File(_) => catalog.default_example(),
        }
    }

    /// Build the starting session, reading any files the configuration names
    pub fn load_session(&self, catalog: &ExampleCatalog) -> Result<PlaygroundSession, ConfigError> {
        let mut session = match &self.initial_source {
            InitialSource::Example(name) => {
                let mut session = PlaygroundSession::new(String::new());
                session.load_example(catalog, name.id());
                session
            }
            InitialSource::File(path) => PlaygroundSession::new(read_file(path)?),
        };

        if let Some(path) = &self.interpreter_input {
            session.set_interpreter_input(read_file(path)?);
        }

        Ok(session)
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
