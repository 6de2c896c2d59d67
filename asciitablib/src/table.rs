//! Tabular data model consumed by the renderer.
//!
//! The renderer never depends on [`Table`] directly: it reads through the
//! [`TabularSource`] trait, so callers holding rows in their own structures
//! can render them without copying into a `Table` first.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single scalar cell.
///
/// `Null` renders as an empty string; every other variant uses its
/// `Display` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Check if this cell holds no value
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Display string for this cell, `None` when the cell is absent.
    pub fn as_display(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

/// A named column and its position in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ordinal: usize,
}

/// An ordered sequence of cells, aligned with the table's columns by ordinal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Row { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T: Into<CellValue>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Row {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Columns plus rows, built by the caller and only read by the renderer.
///
/// Serializes as `{"columns": ["a", "b"], "rows": [[1, "x"], ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableRepr", into = "TableRepr")]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

#[derive(Serialize, Deserialize)]
struct TableRepr {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Row>,
}

impl From<TableRepr> for Table {
    fn from(repr: TableRepr) -> Self {
        let mut table = Table::new(repr.columns);
        table.rows = repr.rows;
        table
    }
}

impl From<Table> for TableRepr {
    fn from(table: Table) -> Self {
        TableRepr {
            columns: table.columns.into_iter().map(|c| c.name).collect(),
            rows: table.rows,
        }
    }
}

impl Table {
    /// Create an empty table with the given column names, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .enumerate()
            .map(|(ordinal, name)| Column {
                name: name.into(),
                ordinal,
            })
            .collect();

        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Cell count is checked at render time, not here.
    pub fn push_row(&mut self, row: impl Into<Row>) {
        self.rows.push(row.into());
    }

    /// Builder: append a row
    pub fn with_row(mut self, row: impl Into<Row>) -> Self {
        self.push_row(row);
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl From<Vec<CellValue>> for Row {
    fn from(cells: Vec<CellValue>) -> Self {
        Row { cells }
    }
}

/// Read-only view of tabular data, indexed by row and column ordinal.
pub trait TabularSource {
    fn column_count(&self) -> usize;

    /// Name of the column at `ordinal`. Panics if out of range.
    fn column_name(&self, ordinal: usize) -> &str;

    fn row_count(&self) -> usize;

    /// Number of cells actually present in `row`.
    fn row_len(&self, row: usize) -> usize;

    /// Display string for a cell; `None` for an absent value.
    fn cell(&self, row: usize, ordinal: usize) -> Option<Cow<'_, str>>;
}

impl TabularSource for Table {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, ordinal: usize) -> &str {
        &self.columns[ordinal].name
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_len(&self, row: usize) -> usize {
        self.rows[row].len()
    }

    fn cell(&self, row: usize, ordinal: usize) -> Option<Cow<'_, str>> {
        self.rows[row].cells.get(ordinal).and_then(CellValue::as_display)
    }
}
