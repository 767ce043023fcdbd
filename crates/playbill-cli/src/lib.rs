//! Playbill CLI library.
//!
//! Core functionality for the `playbill` command-line interface: argument
//! parsing, configuration management, command execution, and output
//! formatting. The `scan` command drives the whole extraction pipeline -
//! recognize, extract, display, optionally save.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
