//! Loading CSV and JSON input into a `Table`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use asciitablib::{CellValue, Row, Table};
use log::debug;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Parse a `--format` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }

    /// Guess the format from a file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// CSV parsing settings
#[derive(Debug, Clone, Copy)]
pub struct CsvOptions {
    /// First record holds the column names
    pub has_headers: bool,
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

/// Read the whole input, from `path` or from stdin when it is `None` or `-`.
pub fn read_source(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path))
        }
    }
}

/// Parse a single-byte delimiter argument (`,`, `;`, `\t` or `tab`).
pub fn parse_delimiter(value: &str) -> anyhow::Result<u8> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ if value.len() == 1 && value.is_ascii() => Ok(value.as_bytes()[0]),
        _ => bail!("delimiter must be a single ASCII character, got '{}'", value),
    }
}

/// Parse CSV text into a table. Empty fields become null cells.
///
/// Records may have differing lengths; the renderer reports those rows.
pub fn parse_csv(text: &str, options: CsvOptions) -> anyhow::Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let first = match records.next() {
        Some(record) => record.context("failed to parse CSV")?,
        None => return Ok(Table::default()),
    };

    let (mut table, pending) = if options.has_headers {
        (Table::new(first.iter()), None)
    } else {
        let names = (1..=first.len()).map(|i| format!("column_{}", i));
        (Table::new(names), Some(first))
    };

    for record in pending.into_iter().map(Ok).chain(records) {
        let record = record.context("failed to parse CSV")?;
        table.push_row(csv_row(&record));
    }

    debug!(
        "loaded CSV: {} columns, {} rows",
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

fn csv_row(record: &csv::StringRecord) -> Row {
    record
        .iter()
        .map(|field| {
            if field.is_empty() {
                CellValue::Null
            } else {
                CellValue::from(field)
            }
        })
        .collect()
}

/// Parse `{"columns": [...], "rows": [[...], ...]}` into a table.
pub fn parse_json(text: &str) -> anyhow::Result<Table> {
    let table: Table = serde_json::from_str(text).context("failed to parse JSON table")?;
    debug!(
        "loaded JSON: {} columns, {} rows",
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

/// Parse `text` in the given format.
pub fn parse_table(text: &str, format: InputFormat, csv: CsvOptions) -> anyhow::Result<Table> {
    match format {
        InputFormat::Csv => parse_csv(text, csv),
        InputFormat::Json => parse_json(text),
    }
}
