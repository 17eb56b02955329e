//! CLI module for rowexport
//!
//! Provides:
//! - export: run one query from a JSON fixture into csv, tsv or jsonl on stdout
//! - stringify: print the canonical text form of a single value

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{export, run, run_command, stringify_json};
pub use config::ExportConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
