//! CLI command implementations
//!
//! Export output goes to the given writer (stdout in the binary); logs go to
//! stderr.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::export::{ExportSummary, Exporter};
use crate::observability::{log_event, Event, Logger};
use crate::sink::build_sink;
use crate::source::FixtureFile;
use crate::value::{stringify, Value};

use super::args::{Cli, Command};
use super::config::ExportConfig;
use super::errors::CliResult;

/// Parse arguments and run the selected command against stdout
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_command(cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run one command, writing its output to `out`
pub fn run_command<W: Write>(command: Command, out: &mut W) -> CliResult<()> {
    match command {
        Command::Export {
            fixture,
            query,
            config,
            format,
            no_header,
            delimiter,
            log_level,
        } => {
            let mut cfg = match config {
                Some(path) => ExportConfig::load(&path)?,
                None => ExportConfig::default(),
            };
            if let Some(format) = format {
                cfg.format = format;
            }
            if no_header {
                cfg.header = false;
            }
            if let Some(delimiter) = delimiter {
                cfg.delimiter = delimiter.to_string();
            }
            if let Some(level) = log_level {
                cfg.log_level = level;
            }
            cfg.validate()?;

            export(&cfg, &fixture, &query, out)?;
            Ok(())
        }
        Command::Stringify { value } => stringify_json(&value, out),
    }
}

/// Export the result of `query` from a fixture file into `out`
pub fn export<W: Write>(
    config: &ExportConfig,
    fixture: &Path,
    query: &str,
    out: &mut W,
) -> CliResult<ExportSummary> {
    Logger::set_min_severity(config.severity()?);
    log_event(
        Event::ConfigLoaded,
        &[
            ("format", config.format.as_str()),
            ("header", if config.header { "true" } else { "false" }),
        ],
    );

    let mut source = FixtureFile::load(fixture)?.into_source()?;
    let sink = build_sink(config.format, config.delimited_options()?, out);
    let mut exporter = Exporter::new(sink);

    Ok(exporter.export(&mut source, query)?)
}

/// Print the text form of a JSON value; non-JSON input is treated as text
pub fn stringify_json<W: Write>(input: &str, out: &mut W) -> CliResult<()> {
    let value = serde_json::from_str::<serde_json::Value>(input)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(input));
    writeln!(out, "{}", stringify(&value))?;
    Ok(())
}
