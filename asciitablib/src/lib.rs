//! # asciitablib
//!
//! Render tabular data as a fixed-width, pipe-delimited ASCII table for
//! console or log output.
//!
//! ## Overview
//!
//! The library is a single pure transformation: a table goes in, a block of
//! text comes out. Column widths are the longest trimmed value in each column
//! (header included), header labels are humanized (`first_name` becomes
//! `First Name`) and a dash rule separates the header from the rows.
//!
//! - **Data model**: [`Table`], [`Column`], [`Row`], [`CellValue`]
//! - **Input boundary**: [`TabularSource`], implemented by `Table` and by any
//!   caller-owned row store
//! - **Renderer**: [`Renderer`] plus the [`render`] shortcut
//! - **Options**: [`RenderOptions`] with an explicit casing [`Locale`]
//!
//! The library does no I/O and never installs a logger; it only emits `log`
//! records.
//!
//! ## Example
//!
//! ```rust
//! use asciitablib::{render, CellValue, Table};
//!
//! let table = Table::new(["id", "user_name"])
//!     .with_row(vec![CellValue::from(1), CellValue::from("ann")]);
//!
//! let text = render(&table).unwrap();
//! assert_eq!(text, "Id | User Name | \n----------------\n1  | ann       | \n");
//! ```

pub mod casing;
pub mod error;
pub mod options;
pub mod render;
pub mod table;

pub use casing::{humanize_header, to_title_case};
pub use error::TableError;
pub use options::{Locale, RenderOptions, ALIGN_CHAR, COLUMN_SEPARATOR, HEADER_SEPARATOR};
pub use render::{column_widths, render, render_optional, Renderer};
pub use table::{CellValue, Column, Row, Table, TabularSource};

/// Result type for asciitablib operations
pub type Result<T> = std::result::Result<T, TableError>;
