//! Child-process engine driving the `isic` command line compiler
//!
//! Each request gets a fresh scratch directory holding the program text and
//! the generated C file. The compiler renders its diagnostic reports on
//! stdout, ahead of anything the interpreted program prints, and exits
//! successfully even when the program is rejected. Reports are split off the
//! front of stdout into individual error and warning strings, minus terminal
//! colors; stderr only matters when the compiler itself fails.

use super::{CompileResult, Engine, EngineError, InterpreterResult};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use tracing::{debug, warn};

const SOURCE_FILE: &str = "playground.isi";
const TARGET_FILE: &str = "playground.c";

/// Engine backed by an external compiler executable
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: PathBuf,
}

/// Raw result of one child process run
struct Invocation {
    status: ExitStatus,
    stdout: String,
    stderr: String,
    generated: Option<String>,
}

impl ProcessEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ProcessEngine {
            program: program.into(),
        }
    }

    fn launch_error(&self, source: io::Error) -> EngineError {
        EngineError::Launch {
            program: self.program.clone(),
            source,
        }
    }

    /// Run the compiler once; `stdin` switches it to interpreter mode
    fn invoke(&self, source: &str, stdin: Option<&str>) -> Result<Invocation, EngineError> {
        let scratch = tempfile::tempdir()?;
        let input_path = scratch.path().join(SOURCE_FILE);
        let target_path = scratch.path().join(TARGET_FILE);
        fs::write(&input_path, source)?;

        let mut command = Command::new(&self.program);
        command
            .arg("-i")
            .arg(&input_path)
            .arg("-o")
            .arg(&target_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if stdin.is_some() {
            command.arg("-e").stdin(Stdio::piped());
        } else {
            command.stdin(Stdio::null());
        }

        let mut child = command.spawn().map_err(|e| self.launch_error(e))?;

        // The whole input is handed over up front; closing the pipe marks EOF.
        let feeder = match (stdin, child.stdin.take()) {
            (Some(text), Some(mut pipe)) => {
                let text = text.to_owned();
                Some(thread::spawn(move || {
                    // The program may exit without draining its input.
                    let _ = pipe.write_all(text.as_bytes());
                }))
            }
            _ => None,
        };

        let output = child.wait_with_output().map_err(|e| self.launch_error(e))?;
        if let Some(feeder) = feeder {
            let _ = feeder.join();
        }

        if !output.status.success() {
            warn!(status = %output.status, "engine exited unsuccessfully");
        }

        let generated = if stdin.is_none() {
            fs::read_to_string(&target_path).ok()
        } else {
            None
        };

        Ok(Invocation {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            generated,
        })
    }
}

impl Engine for ProcessEngine {
    fn initialize(&self) -> Result<(), EngineError> {
        let status = Command::new(&self.program)
            .arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.launch_error(e))?;

        if status.success() {
            debug!(program = %self.program.display(), "engine probe succeeded");
            Ok(())
        } else {
            Err(EngineError::Probe {
                program: self.program.clone(),
                status,
            })
        }
    }

    fn compile_to_target(&self, source: &str) -> Result<CompileResult, EngineError> {
        let invocation = self.invoke(source, None)?;
        let (reports, rest) = Reports::collect(&invocation);
        if !rest.trim().is_empty() {
            debug!(text = %rest, "ignoring unrecognized compiler output");
        }

        let output_code = if reports.errors.is_empty() && invocation.status.success() {
            invocation.generated
        } else {
            None
        };

        Ok(CompileResult {
            output_code,
            errors: reports.errors,
            warnings: reports.warnings,
        })
    }

    fn run_interpreter(
        &self,
        source: &str,
        stdin: &str,
    ) -> Result<InterpreterResult, EngineError> {
        let invocation = self.invoke(source, Some(stdin))?;
        let (reports, output) = Reports::collect(&invocation);

        Ok(InterpreterResult {
            output,
            errors: reports.errors,
            warnings: reports.warnings,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportKind {
    Error,
    Warning,
}

/// Diagnostics recovered from the compiler's output
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Reports {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Reports {
    /// Take the reports off the front of stdout and account for an abnormal
    /// exit
    ///
    /// Returns the reports and the stdout text that follows them.
    fn collect(invocation: &Invocation) -> (Self, String) {
        let (mut reports, rest) = Self::split(&invocation.stdout);

        if !invocation.status.success() && reports.errors.is_empty() {
            let stderr = strip_ansi(&invocation.stderr);
            let fallback = if stderr.trim().is_empty() {
                format!("engine exited with {}", invocation.status)
            } else {
                stderr.trim().to_string()
            };
            reports.errors.push(fallback);
        }

        (reports, rest)
    }

    /// Split rendered reports off the front of `text`
    ///
    /// A report starts at a header line and runs until its closing frame
    /// line or the next header. The first line outside any report ends the
    /// scan; it and everything after it come back untouched.
    pub(crate) fn split(text: &str) -> (Self, String) {
        let mut reports = Reports::default();
        let mut current: Option<(ReportKind, String)> = None;
        let mut consumed = 0;

        for line in text.split_inclusive('\n') {
            let clean = strip_ansi(line.trim_end_matches(|c: char| c == '\n' || c == '\r'));
            let footer = is_report_footer(&clean);

            if let Some(kind) = header_kind(&clean) {
                if let Some(done) = current.take() {
                    reports.push(done);
                }
                current = Some((kind, clean));
            } else {
                match current.as_mut() {
                    Some((_, body)) => {
                        body.push('\n');
                        body.push_str(&clean);
                    }
                    None => break,
                }
                if footer {
                    if let Some(done) = current.take() {
                        reports.push(done);
                    }
                }
            }

            consumed += line.len();
        }

        if let Some(done) = current {
            reports.push(done);
        }

        (reports, text[consumed..].to_string())
    }

    fn push(&mut self, (kind, text): (ReportKind, String)) {
        let text = text.trim_end().to_string();
        match kind {
            ReportKind::Error => self.errors.push(text),
            ReportKind::Warning => self.warnings.push(text),
        }
    }
}

/// The `───╯` line closing a rendered report
fn is_report_footer(line: &str) -> bool {
    let line = line.trim();
    line.ends_with('╯') && line.chars().all(|c| c == '─' || c == '╯')
}

/// Recognize `Error: ...`, `Warning: ...` and `[CODE] Error: ...` headers
fn header_kind(line: &str) -> Option<ReportKind> {
    let mut rest = line.trim_start();
    if let Some(tagged) = rest.strip_prefix('[') {
        let close = tagged.find(']')?;
        rest = tagged[close + 1..].trim_start();
    }

    if rest.starts_with("Error:") {
        Some(ReportKind::Error)
    } else if rest.starts_with("Warning:") {
        Some(ReportKind::Warning)
    } else {
        None
    }
}

/// Remove ANSI CSI escape sequences (colors, cursor movement)
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in '@'..='~'
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
