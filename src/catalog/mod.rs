//! Named example programs that seed the editor
//!
//! The catalog is a closed set: [`ExampleName`] enumerates every entry, and
//! [`ExampleCatalog`] maps each one to its program text. It is built once at
//! startup and never mutated afterwards.

mod programs;

use clap::ValueEnum;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a built-in example program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExampleName {
    HelloWorld,
    Io,
    Fibonacci,
    Conditional,
}

impl ExampleName {
    /// All examples, in the order the selector offers them
    pub const ALL: [ExampleName; 4] = [
        ExampleName::HelloWorld,
        ExampleName::Io,
        ExampleName::Fibonacci,
        ExampleName::Conditional,
    ];

    /// Kebab-case identifier used on the command line and as the catalog key
    pub fn id(self) -> &'static str {
        match self {
            ExampleName::HelloWorld => "hello-world",
            ExampleName::Io => "io",
            ExampleName::Fibonacci => "fibonacci",
            ExampleName::Conditional => "conditional",
        }
    }

    /// Human-readable label shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            ExampleName::HelloWorld => "Hello world",
            ExampleName::Io => "I/O",
            ExampleName::Fibonacci => "Fibonacci",
            ExampleName::Conditional => "Conditionals",
        }
    }

    /// Next entry in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|n| *n == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous entry in selector order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|n| *n == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ExampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown example '{0}'")]
pub struct UnknownExample(pub String);

impl FromStr for ExampleName {
    type Err = UnknownExample;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExampleName::ALL
            .into_iter()
            .find(|name| name.id() == s)
            .ok_or_else(|| UnknownExample(s.to_string()))
    }
}

/// Immutable mapping from example identifier to program text
#[derive(Debug, Clone)]
pub struct ExampleCatalog {
    entries: FxHashMap<&'static str, &'static str>,
}

impl ExampleCatalog {
    /// Build the catalog of built-in programs
    pub fn new() -> Self {
        let entries = ExampleName::ALL
            .into_iter()
            .map(|name| (name.id(), Self::program(name)))
            .collect();
        ExampleCatalog { entries }
    }

    fn program(name: ExampleName) -> &'static str {
        match name {
            ExampleName::HelloWorld => programs::HELLO_WORLD,
            ExampleName::Io => programs::IO,
            ExampleName::Fibonacci => programs::FIBONACCI,
            ExampleName::Conditional => programs::CONDITIONAL,
        }
    }

    /// The example the editor starts with
    pub fn default_example(&self) -> ExampleName {
        ExampleName::HelloWorld
    }

    /// Program text for a known example
    pub fn get(&self, name: ExampleName) -> Option<&'static str> {
        self.entries.get(name.id()).copied()
    }

    /// Program text for a free-form identifier, `None` if it is not in the catalog
    pub fn lookup(&self, id: &str) -> Option<&'static str> {
        self.entries.get(id).copied()
    }

    /// Example names in selector order
    pub fn names(&self) -> impl Iterator<Item = ExampleName> + '_ {
        ExampleName::ALL
            .into_iter()
            .filter(|name| self.entries.contains_key(name.id()))
    }
}

impl Default for ExampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}
