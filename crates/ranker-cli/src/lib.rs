//! Ranker CLI library.
//!
//! This library provides the pieces of the `ranker` command-line tool:
//! argument parsing, configuration, output formatting and the interactive
//! judge loop that drives a [`ranker_domain::Session`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
