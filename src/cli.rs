//! Command line arguments

use crate::catalog::ExampleName;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "isi-playground",
    version,
    about = "IsiLang playground - edit, compile and run IsiLang programs",
    long_about = "Edit IsiLang programs in a terminal UI, compile them to C and run them \
                  through the interpreter, with diagnostics shown side by side.\n\n\
                  Without a subcommand the interactive playground starts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Compiler executable to drive (the `isic` command line compiler).
    #[arg(long, value_name = "PATH", default_value = "isic", global = true)]
    pub engine: PathBuf,

    /// Example program to start from.
    #[arg(long, value_enum, global = true)]
    pub example: Option<ExampleName>,

    /// Start from the contents of a source file instead of an example.
    #[arg(long, value_name = "PATH", global = true, conflicts_with = "example")]
    pub file: Option<PathBuf>,

    /// File whose contents become the interpreter's standard input.
    #[arg(long, value_name = "PATH", global = true)]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to a file. The interactive playground logs nowhere without it.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compile the program once and print the generated C code.
    Compile,

    /// Run the program once through the interpreter and print its output.
    Run,

    /// List the built-in examples.
    Examples {
        /// Print the source of one example instead of the list.
        #[arg(long, value_enum, value_name = "NAME")]
        show: Option<ExampleName>,
    },
}
