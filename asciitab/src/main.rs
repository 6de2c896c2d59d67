//! # asciitab
//!
//! A CLI tool that prints CSV or JSON data as a fixed-width ASCII table.
//!
//! ## Overview
//!
//! asciitab is built on top of asciitablib: it loads the input into a
//! `Table`, renders it, and writes the text to stdout. Column names are
//! humanized (`first_name` becomes `First Name`) and every column is padded
//! to its longest value.
//!
//! ## Usage
//!
//! ```bash
//! # Render a CSV file
//! asciitab users.csv
//!
//! # Read from stdin, semicolon separated, no header row
//! cat data.txt | asciitab --delimiter ';' --no-header-row
//!
//! # Render a JSON table ({"columns": [...], "rows": [[...]]})
//! asciitab report.json
//!
//! # Turkish casing rules for header labels
//! asciitab --locale tr users.csv
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

mod input;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use asciitablib::{Locale, RenderOptions, Renderer};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;

use input::{parse_delimiter, parse_table, read_source, CsvOptions, InputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("asciitab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print CSV or JSON data as a fixed-width ASCII table")
        .arg(
            Arg::new("input")
                .help("Input file (reads stdin when omitted or '-')"),
        )
        .arg(
            Arg::new("format")
                .short('F')
                .long("format")
                .value_parser(["csv", "json"])
                .help("Input format (defaults to the file extension, else csv)"),
        )
        .arg(
            Arg::new("locale")
                .short('l')
                .long("locale")
                .default_value("invariant")
                .help("Casing rules for header labels (invariant, en, tr, az)"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .help("CSV field delimiter (single character, or 'tab')"),
        )
        .arg(
            Arg::new("no-header-row")
                .long("no-header-row")
                .action(ArgAction::SetTrue)
                .help("CSV has no header row; columns are named column_1, column_2, ..."),
        )
}

/// Pick the input format from `--format`, else from the file extension
fn extract_format(matches: &ArgMatches) -> InputFormat {
    matches
        .get_one::<String>("format")
        .and_then(|name| InputFormat::from_name(name))
        .or_else(|| {
            matches
                .get_one::<String>("input")
                .filter(|path| path.as_str() != "-")
                .map(|path| InputFormat::from_path(Path::new(path)))
        })
        .unwrap_or(InputFormat::Csv)
}

/// Build CSV options from matches
fn extract_csv_options(matches: &ArgMatches) -> anyhow::Result<CsvOptions> {
    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(|d| parse_delimiter(d))
        .transpose()?
        .unwrap_or(b',');

    Ok(CsvOptions {
        has_headers: !matches.get_flag("no-header-row"),
        delimiter,
    })
}

/// Build render options from matches
fn extract_render_options(matches: &ArgMatches) -> anyhow::Result<RenderOptions> {
    let locale = match matches.get_one::<String>("locale") {
        Some(tag) => tag.parse::<Locale>()?,
        None => Locale::default(),
    };
    Ok(RenderOptions::new().locale(locale))
}

/// Load, render and return the table text
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let format = extract_format(matches);
    let csv_options = extract_csv_options(matches)?;
    let render_options = extract_render_options(matches)?;
    debug!("format {:?}, {:?}, {:?}", format, csv_options, render_options);

    let text = read_source(matches.get_one::<String>("input").map(|s| s.as_str()))?;
    let table = parse_table(&text, format, csv_options)?;

    Renderer::new(render_options)
        .render(&table)
        .context("failed to render table")
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    let output = match run(&matches) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Error: failed to write output: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
