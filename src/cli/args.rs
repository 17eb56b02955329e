//! CLI argument definitions using clap
//!
//! Commands:
//! - rowexport export --fixture <path> --query <sql> [--config <path>] [overrides]
//! - rowexport stringify <json>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::sink::Format;

/// rowexport - stream query results into delimited or JSON output
#[derive(Parser, Debug)]
#[command(name = "rowexport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a query against a fixture source and write the result to stdout
    Export {
        /// JSON fixture holding canned result sets
        #[arg(long)]
        fixture: PathBuf,

        /// Query text, matched exactly against the fixture
        #[arg(long, short)]
        query: String,

        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_parser = parse_format)]
        format: Option<Format>,

        /// Suppress the header row (overrides config)
        #[arg(long)]
        no_header: bool,

        /// Field delimiter for csv output (overrides config)
        #[arg(long)]
        delimiter: Option<char>,

        /// Minimum log level on stderr (overrides config)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Print the text form of one JSON value
    Stringify {
        /// JSON value; anything that does not parse as JSON is taken as text
        value: String,
    },
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse()
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
