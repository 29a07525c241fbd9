// isi-playground: terminal playground for the IsiLang teaching language

use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use isi_playground::catalog::ExampleCatalog;
use isi_playground::cli::{Cli, Command};
use isi_playground::commands;
use isi_playground::config::PlaygroundConfig;
use isi_playground::engine::{EngineGateway, ProcessEngine};
use isi_playground::logging::{init_logging, LogFallback};
use isi_playground::ui::App;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = ExampleCatalog::new();
    let config = PlaygroundConfig::from_cli(&cli, &catalog);

    let fallback = if cli.command.is_some() {
        LogFallback::Stderr
    } else {
        LogFallback::Discard
    };
    init_logging(&config.log, fallback).context("failed to initialize logging")?;

    // Listing examples needs no engine
    if let Some(Command::Examples { show }) = cli.command {
        let mut stdout = io::stdout().lock();
        commands::examples(&catalog, show, &mut stdout)?;
        return Ok(());
    }

    // Engine setup failure is fatal: nothing can be compiled or run without it
    let gateway = EngineGateway::new(ProcessEngine::new(&config.engine_program));
    gateway
        .initialize()
        .context("the IsiLang engine could not be initialized")?;

    let mut session = config.load_session(&catalog)?;

    match cli.command {
        Some(Command::Compile) => {
            let outcome = commands::compile(
                &mut session,
                &gateway,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            io::stdout().flush()?;
            process::exit(outcome.exit_code());
        }
        Some(Command::Run) => {
            let outcome = commands::run(
                &mut session,
                &gateway,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            io::stdout().flush()?;
            process::exit(outcome.exit_code());
        }
        Some(Command::Examples { .. }) | None => {}
    }

    info!(engine = %config.engine_program.display(), "starting playground");
    let selected = config.initial_example(&catalog);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, &gateway, catalog, selected);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
