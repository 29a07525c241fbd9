// Integration tests for the child-process engine against a stand-in compiler
#![cfg(unix)]

use isi_playground::catalog::{ExampleCatalog, ExampleName};
use isi_playground::engine::{Engine, EngineError, EngineGateway, ProcessEngine};
use isi_playground::session::panels::panel_views;
use isi_playground::session::PlaygroundSession;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Mimics the `isic` command line: `-i IN -o OUT [-e]`
///
/// Like the real compiler it creates the output file before checking
/// anything, prints framed reports on stdout, exits 0 after rejecting a
/// program and prints warnings before running the interpreter.
const FAKE_ISIC: &str = r#"#!/bin/sh
if [ "$1" = "--help" ]; then exit 0; fi
in="$2"; out="$4"; mode="$5"
: > "$out"
report() {
  printf '\033[%sm%s:\033[0m %s\n   ╭─[<unknown>:1:1]\n   │\n 1 │ %s\n───╯\n' "$1" "$2" "$3" "$4"
}
open=$(tr -cd '{' < "$in" | wc -c)
close=$(tr -cd '}' < "$in" | wc -c)
if ! grep -q 'programa' "$in" || ! grep -q 'fimprog\.' "$in" || [ $open -ne $close ] || grep -q BROKEN "$in"; then
  report 31 Error 'Syntax error' 'expected fimprog'
  exit 0
fi
if grep -q MISMATCH "$in"; then
  report 31 Error 'Type error' 'type mismatch'
  exit 0
fi
if grep -q CRASH "$in"; then
  echo "thread 'main' panicked" >&2
  exit 101
fi
if grep -q UNUSED "$in"; then
  report 33 Warning 'Usage pattern warning' 'b is never read'
fi
if [ "$mode" = "-e" ]; then
  cat
  exit 0
fi
printf 'int main() {}\n' > "$out"
"#;

const FAILING_PROBE: &str = "#!/bin/sh\nexit 3\n";

const GENERATED: &str = "int main() {}\n";

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod failed");
    path
}

struct Scripts {
    _dir: tempfile::TempDir,
    fake: PathBuf,
    failing: PathBuf,
}

/// Scripts are written once, before any test spawns them
fn scripts() -> &'static Scripts {
    static SCRIPTS: OnceLock<Scripts> = OnceLock::new();
    SCRIPTS.get_or_init(|| {
        let dir = tempfile::tempdir().expect("tempdir");
        let fake = write_script(dir.path(), "fake-isic", FAKE_ISIC);
        let failing = write_script(dir.path(), "failing-isic", FAILING_PROBE);
        Scripts {
            _dir: dir,
            fake,
            failing,
        }
    })
}

fn ready_engine() -> EngineGateway<ProcessEngine> {
    let gateway = EngineGateway::new(ProcessEngine::new(&scripts().fake));
    gateway.initialize().expect("fake engine should initialize");
    gateway
}

/// A report as the stand-in renders it, colors removed
fn report(header: &str, label: &str) -> String {
    format!("{header}\n   ╭─[<unknown>:1:1]\n   │\n 1 │ {label}\n───╯")
}

#[test]
fn test_missing_program_fails_initialization() {
    let engine = ProcessEngine::new("/nonexistent/isic");
    let err = engine.initialize().unwrap_err();
    assert!(matches!(err, EngineError::Launch { .. }), "{:?}", err);
}

#[test]
fn test_failing_probe_fails_initialization() {
    let engine = ProcessEngine::new(&scripts().failing);
    let err = engine.initialize().unwrap_err();
    assert!(matches!(err, EngineError::Probe { .. }), "{:?}", err);
}

#[test]
fn test_clean_compile_returns_generated_code() {
    let gateway = ready_engine();
    let result = gateway
        .compile_to_target("programa escreva(\"Hello world\"). fimprog.")
        .unwrap();
    assert_eq!(result.output_code.as_deref(), Some(GENERATED));
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_syntax_error_becomes_error_diagnostic() {
    let gateway = ready_engine();
    let result = gateway.compile_to_target("programa BROKEN").unwrap();
    assert_eq!(result.output_code, None);
    assert_eq!(
        result.errors,
        vec![report("Error: Syntax error", "expected fimprog")]
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn test_type_error_yields_no_code() {
    let gateway = ready_engine();
    let result = gateway
        .compile_to_target("programa a := MISMATCH. fimprog.")
        .unwrap();
    assert_eq!(result.output_code, None);
    assert_eq!(result.errors, vec![report("Error: Type error", "type mismatch")]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_warnings_keep_generated_code() {
    let gateway = ready_engine();
    let result = gateway
        .compile_to_target("programa declare UNUSED: int. fimprog.")
        .unwrap();
    assert_eq!(result.output_code.as_deref(), Some(GENERATED));
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec![report("Warning: Usage pattern warning", "b is never read")]
    );
}

#[test]
fn test_run_warning_stays_out_of_program_output() {
    let gateway = ready_engine();
    let result = gateway
        .run_interpreter("programa declare UNUSED: int. leia(a). fimprog.", "7\n")
        .unwrap();
    assert_eq!(result.output, "7\n");
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec![report("Warning: Usage pattern warning", "b is never read")]
    );
}

#[test]
fn test_run_type_error_has_no_output() {
    let gateway = ready_engine();
    let result = gateway
        .run_interpreter("programa a := MISMATCH. fimprog.", "7\n")
        .unwrap();
    assert_eq!(result.output, "");
    assert_eq!(result.errors, vec![report("Error: Type error", "type mismatch")]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_type_error_enables_only_diagnostics() {
    let gateway = ready_engine();
    let mut session = PlaygroundSession::new("programa a := MISMATCH. fimprog.");

    session.compile(&gateway).unwrap();

    let views = panel_views(&session);
    assert!(views.diagnostics.enabled);
    assert_eq!(views.diagnostics.error_count, 1);
    assert!(!views.code_result.enabled);
}

#[test]
fn test_crash_without_report_is_an_error() {
    let gateway = ready_engine();
    let result = gateway.run_interpreter("programa CRASH fimprog.", "").unwrap();
    assert_eq!(result.errors, vec!["thread 'main' panicked".to_string()]);
}

#[test]
fn test_interpreter_receives_whole_stdin() {
    let gateway = ready_engine();
    let mut session = PlaygroundSession::new("programa leia(a). fimprog.");
    session.set_interpreter_input("5\n6\n");

    session.run(&gateway).unwrap();

    let views = panel_views(&session);
    assert_eq!(views.interpreter.output, "5\n6\n");
    assert!(!views.diagnostics.enabled);
    assert!(!views.code_result.enabled);
}

#[test]
fn test_every_example_compiles_and_runs_cleanly() {
    let gateway = ready_engine();
    let catalog = ExampleCatalog::new();

    for name in ExampleName::ALL {
        let source = catalog.get(name).expect("catalog covers every name");

        let compiled = gateway.compile_to_target(source).unwrap();
        assert!(compiled.errors.is_empty(), "{name}: {:?}", compiled.errors);
        assert!(compiled.warnings.is_empty(), "{name}: {:?}", compiled.warnings);
        assert_eq!(compiled.output_code.as_deref(), Some(GENERATED), "{name}");

        let ran = gateway.run_interpreter(source, "3\n2\n").unwrap();
        assert!(ran.errors.is_empty(), "{name}: {:?}", ran.errors);
        assert_eq!(ran.output, "3\n2\n", "{name}");
    }
}
