// Integration tests driving the TUI app with key events

mod common;

use common::{ready_gateway, strings, Request, ScriptedEngine};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use isi_playground::catalog::{ExampleCatalog, ExampleName};
use isi_playground::engine::{CompileResult, InterpreterResult};
use isi_playground::session::PlaygroundSession;
use isi_playground::ui::app::FocusedPane;
use isi_playground::ui::panes::StatusKind;
use isi_playground::ui::App;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text<E: isi_playground::engine::Engine>(app: &mut App<'_, E>, text: &str) {
    for c in text.chars() {
        if c == '\n' {
            app.handle_key_event(key(KeyCode::Enter));
        } else {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for row in buffer.content.chunks(buffer.area.width as usize) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_typing_edits_session_source() {
    let gateway = ready_gateway(ScriptedEngine::new());
    let mut app = App::new(
        PlaygroundSession::new(""),
        &gateway,
        ExampleCatalog::new(),
        ExampleName::HelloWorld,
    );

    type_text(&mut app, "programa\nfimprog.");
    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.session.source_text(), "programa\nfimprog");
}

#[test]
fn test_compile_key_updates_panels_and_status() {
    let gateway = ready_gateway(ScriptedEngine::new().on_compile(CompileResult {
        output_code: None,
        errors: strings(&["line 3: type mismatch"]),
        warnings: vec![],
    }));
    let mut app = App::new(
        PlaygroundSession::new("programa fimprog."),
        &gateway,
        ExampleCatalog::new(),
        ExampleName::HelloWorld,
    );

    app.handle_key_event(key(KeyCode::F(5)));

    assert_eq!(
        app.session.diagnostics().errors,
        strings(&["line 3: type mismatch"])
    );
    assert_eq!(app.status_kind, StatusKind::Failure);
    assert_eq!(app.status_message, "Compile reported 1 error(s)");
}

#[test]
fn test_interpreter_input_is_typed_before_run() {
    let gateway = ready_gateway(ScriptedEngine::new().on_run(InterpreterResult {
        output: "12\n".into(),
        errors: vec![],
        warnings: vec![],
    }));
    let mut app = App::new(
        PlaygroundSession::new("src"),
        &gateway,
        ExampleCatalog::new(),
        ExampleName::Io,
    );

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focused_pane, FocusedPane::Interpreter);
    type_text(&mut app, "3\n4");
    app.handle_key_event(ctrl('r'));

    assert_eq!(app.session.interpreter_input(), "3\n4");
    assert_eq!(app.session.last_interpreter_output(), "12\n");
    assert_eq!(app.session.source_text(), "src");
    assert_eq!(
        gateway.engine().requests(),
        vec![Request::Run {
            source: "src".into(),
            stdin: "3\n4".into()
        }]
    );
}

#[test]
fn test_example_picker_loads_on_request() {
    let gateway = ready_gateway(ScriptedEngine::new());
    let catalog = ExampleCatalog::new();
    let fibonacci = catalog.get(ExampleName::Fibonacci).unwrap();
    let mut app = App::new(
        PlaygroundSession::new("mine"),
        &gateway,
        catalog,
        ExampleName::Io,
    );

    app.handle_key_event(key(KeyCode::F(3)));
    assert_eq!(app.selected_example, ExampleName::Fibonacci);
    assert_eq!(app.session.source_text(), "mine");

    app.handle_key_event(key(KeyCode::F(4)));
    assert_eq!(app.session.source_text(), fibonacci);
}

#[test]
fn test_quit_keys() {
    let gateway = ready_gateway(ScriptedEngine::new());
    let mut app = App::new(
        PlaygroundSession::new(""),
        &gateway,
        ExampleCatalog::new(),
        ExampleName::HelloWorld,
    );

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.session.source_text(), "q");

    app.handle_key_event(ctrl('q'));
    assert!(app.should_quit);
}

#[test]
fn test_render_marks_inactive_panels() {
    let gateway = ready_gateway(ScriptedEngine::new().on_compile(CompileResult {
        output_code: Some("int main(void) {\n    return 0;\n}\n".into()),
        errors: vec![],
        warnings: vec![],
    }));
    let mut app = App::new(
        PlaygroundSession::new("programa\n    escreva(\"Hello world\").\nfimprog."),
        &gateway,
        ExampleCatalog::new(),
        ExampleName::HelloWorld,
    );
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let before = screen_text(&terminal);
    assert!(before.contains("Diagnostics (inactive)"));
    assert!(before.contains("Code emitter output (inactive)"));
    assert!(before.contains("escreva"));

    app.handle_key_event(key(KeyCode::F(5)));
    terminal.draw(|f| app.render(f)).unwrap();
    let after = screen_text(&terminal);
    assert!(after.contains("Diagnostics (inactive)"));
    assert!(!after.contains("Code emitter output (inactive)"));
    assert!(after.contains("int main(void) {"));
}
