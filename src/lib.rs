//! # Introduction
//!
//! isi-playground is a terminal playground for IsiLang, a small Portuguese-keyword
//! teaching language. Programs are written in an editor pane, compiled to C or
//! run through the interpreter, and the generated code, program output and
//! diagnostics are shown side by side in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! The compiler and interpreter are not part of this crate: they are reached
//! through the [`engine::Engine`] trait, normally backed by the `isic`
//! command line compiler.
//!
//! ## Data flow
//!
//! ```text
//! key press → App → PlaygroundSession → EngineGateway → Engine
//!                          ↓
//!               panel projections → panes
//! ```
//!
//! 1. [`catalog`] — the fixed set of example programs.
//! 2. [`engine`] — the engine trait, the one-shot initialization gateway and
//!    the child-process engine.
//! 3. [`session`] — the session aggregate and its transitions, plus the pure
//!    panel projections in [`session::panels`].
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 5. [`commands`] — headless compile/run/examples used by the binary.
//!
//! Ambient pieces: [`cli`] (clap arguments), [`config`] (startup
//! configuration) and [`logging`] (tracing subscriber setup).

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod logging;
pub mod session;
pub mod ui;
