//! Headless commands: one compile, one run, or the example list
//!
//! These drive the same session transitions and panel projections as the
//! interactive playground and print the panels that are enabled afterwards.

use crate::catalog::{ExampleCatalog, ExampleName};
use crate::engine::{Engine, EngineError, EngineGateway};
use crate::session::panels::{self, DiagnosticsView};
use crate::session::PlaygroundSession;
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Whether the engine reported errors for the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Errors,
}

impl Outcome {
    fn of(session: &PlaygroundSession) -> Self {
        if session.diagnostics().has_errors() {
            Outcome::Errors
        } else {
            Outcome::Clean
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Errors => 1,
        }
    }
}

/// Compile once; generated code goes to `out`, diagnostics to `err`
pub fn compile<E: Engine>(
    session: &mut PlaygroundSession,
    gateway: &EngineGateway<E>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CommandError> {
    session.compile(gateway)?;

    write_diagnostics(&panels::diagnostics_view(session), err)?;
    let code = panels::code_result_view(session);
    if code.enabled {
        out.write_all(code.code.as_bytes())?;
        if !code.code.ends_with('\n') {
            writeln!(out)?;
        }
    }

    Ok(Outcome::of(session))
}

/// Run once; program output goes to `out`, diagnostics to `err`
pub fn run<E: Engine>(
    session: &mut PlaygroundSession,
    gateway: &EngineGateway<E>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome, CommandError> {
    session.run(gateway)?;

    write_diagnostics(&panels::diagnostics_view(session), err)?;
    out.write_all(panels::interpreter_view(session).output.as_bytes())?;

    Ok(Outcome::of(session))
}

/// List example identifiers, or print one example's program text
pub fn examples(
    catalog: &ExampleCatalog,
    show: Option<ExampleName>,
    out: &mut impl Write,
) -> io::Result<()> {
    match show {
        Some(name) => {
            if let Some(text) = catalog.get(name) {
                writeln!(out, "{}", text.trim_end())?;
            }
        }
        None => {
            for name in catalog.names() {
                writeln!(out, "{:<12} {}", name.id(), name.label())?;
            }
        }
    }
    Ok(())
}

fn write_diagnostics(view: &DiagnosticsView, err: &mut impl Write) -> io::Result<()> {
    if !view.enabled {
        return Ok(());
    }
    if view.error_count > 0 {
        writeln!(err, "errors:")?;
        writeln!(err, "{}", view.errors)?;
    }
    if view.warning_count > 0 {
        writeln!(err, "warnings:")?;
        writeln!(err, "{}", view.warnings)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_examples_in_order() {
        let mut out = Vec::new();
        examples(&ExampleCatalog::new(), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let ids: Vec<_> = text
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(ids, vec!["hello-world", "io", "fibonacci", "conditional"]);
    }

    #[test]
    fn shows_one_example() {
        let catalog = ExampleCatalog::new();
        let mut out = Vec::new();
        examples(&catalog, Some(ExampleName::HelloWorld), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", catalog.get(ExampleName::HelloWorld).unwrap())
        );
    }

    #[test]
    fn silent_when_no_diagnostics() {
        let view = DiagnosticsView {
            enabled: false,
            errors: String::new(),
            warnings: String::new(),
            error_count: 0,
            warning_count: 0,
        };
        let mut err = Vec::new();
        write_diagnostics(&view, &mut err).unwrap();
        assert!(err.is_empty());
    }
}
