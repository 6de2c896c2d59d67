//! ASCII table rendering.
//!
//! Output layout, one `\n`-terminated line each:
//!
//! ```text
//! Id | User Name |
//! ----------------
//! 1  | ann       |
//! ```
//!
//! Every cell, header labels included, is trimmed, padded to its column
//! width and followed by [`COLUMN_SEPARATOR`]. The rule under the header is
//! as long as the header line without the separator's trailing space.

use log::{debug, trace};

use crate::casing::humanize_header;
use crate::options::{RenderOptions, ALIGN_CHAR, COLUMN_SEPARATOR, HEADER_SEPARATOR};
use crate::table::TabularSource;
use crate::{Result, TableError};

/// Stateless table renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    /// Options this renderer was built with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render `table` to text: header line, rule line, then one line per row.
    ///
    /// Fails with [`TableError::InvalidInput`] if any row's cell count differs
    /// from the column count.
    pub fn render<T: TabularSource + ?Sized>(&self, table: &T) -> Result<String> {
        validate_shape(table)?;

        let widths = column_widths(table);
        debug!(
            "rendering {} columns x {} rows, widths {:?}",
            table.column_count(),
            table.row_count(),
            widths
        );

        let mut output = String::new();
        self.append_header(table, &widths, &mut output);
        append_rows(table, &widths, &mut output);

        Ok(output)
    }

    /// Like [`Renderer::render`], but an absent table is an `InvalidInput` error.
    pub fn render_optional<T: TabularSource + ?Sized>(&self, table: Option<&T>) -> Result<String> {
        match table {
            Some(table) => self.render(table),
            None => Err(TableError::missing_table()),
        }
    }

    fn append_header<T: TabularSource + ?Sized>(
        &self,
        table: &T,
        widths: &[usize],
        output: &mut String,
    ) {
        let mut header = String::new();
        for (ordinal, &width) in widths.iter().enumerate() {
            let label = humanize_header(table.column_name(ordinal).trim(), self.options.locale);
            align_value_and_add_separator(&label, width, &mut header);
        }

        let rule_len = header.chars().count().saturating_sub(1);
        trace!("header {:?}, rule length {}", header, rule_len);

        output.push_str(&header);
        output.push('\n');
        output.extend(std::iter::repeat(HEADER_SEPARATOR).take(rule_len));
        output.push('\n');
    }
}

/// Render with default options.
pub fn render<T: TabularSource + ?Sized>(table: &T) -> Result<String> {
    Renderer::default().render(table)
}

/// Render with default options; `None` fails with `InvalidInput`.
pub fn render_optional<T: TabularSource + ?Sized>(table: Option<&T>) -> Result<String> {
    Renderer::default().render_optional(table)
}

/// Display width of each column, by ordinal.
///
/// The width is the longest trimmed char count among the header name and
/// every cell in the column; absent cells count as empty. With no rows it is
/// just the header length.
pub fn column_widths<T: TabularSource + ?Sized>(table: &T) -> Vec<usize> {
    (0..table.column_count())
        .map(|ordinal| {
            let header_len = trimmed_len(table.column_name(ordinal));
            (0..table.row_count())
                .map(|row| table.cell(row, ordinal).map_or(0, |v| trimmed_len(&v)))
                .fold(header_len, usize::max)
        })
        .collect()
}

fn validate_shape<T: TabularSource + ?Sized>(table: &T) -> Result<()> {
    let expected = table.column_count();
    for row in 0..table.row_count() {
        let found = table.row_len(row);
        if found != expected {
            return Err(TableError::row_length(row, expected, found));
        }
    }
    Ok(())
}

fn append_rows<T: TabularSource + ?Sized>(table: &T, widths: &[usize], output: &mut String) {
    for row in 0..table.row_count() {
        for (ordinal, &width) in widths.iter().enumerate() {
            let value = table.cell(row, ordinal);
            let value = value.as_deref().map_or("", str::trim);
            align_value_and_add_separator(value, width, output);
        }
        output.push('\n');
    }
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Pad `value` and append it plus the column separator to `output`.
///
/// Values at or over the width get `len - width` padding instead of none;
/// widths come from the same values, so in practice that is always zero.
fn align_value_and_add_separator(value: &str, width: usize, output: &mut String) {
    let len = value.chars().count();
    let remaining = if len < width { width - len } else { len - width };

    output.push_str(value);
    output.extend(std::iter::repeat(ALIGN_CHAR).take(remaining));
    output.push_str(COLUMN_SEPARATOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Locale;
    use crate::table::{CellValue, Table};

    fn users() -> Table {
        Table::new(["id", "user_name"]).with_row(vec![CellValue::from(1), CellValue::from("ann")])
    }

    #[test]
    fn test_render_users() {
        let text = render(&users()).unwrap();
        assert_eq!(
            text,
            "Id | User Name | \n\
             ----------------\n\
             1  | ann       | \n"
        );
    }

    #[test]
    fn test_zero_rows() {
        let table = Table::new(["score"]);
        let text = render(&table).unwrap();
        assert_eq!(text, "Score | \n-------\n");
        assert_eq!(column_widths(&table), vec![5]);
    }

    #[test]
    fn test_zero_columns() {
        let table = Table::new(Vec::<String>::new())
            .with_row(Vec::<CellValue>::new())
            .with_row(Vec::<CellValue>::new());
        assert_eq!(render(&table).unwrap(), "\n\n\n\n");
    }

    #[test]
    fn test_null_cell_is_padded() {
        let table = Table::new(["name", "note"])
            .with_row(vec![CellValue::from("bob"), CellValue::Null])
            .with_row(vec![CellValue::from("al"), CellValue::from("hi")]);
        let text = render(&table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "bob  |      | ");
        assert_eq!(lines[3], "al   | hi   | ");
    }

    #[test]
    fn test_widths_use_trimmed_values() {
        let table = Table::new(["  a  ", "b"])
            .with_row(vec![CellValue::from("   xyz   "), CellValue::from(" 12345 ")]);
        assert_eq!(column_widths(&table), vec![3, 5]);

        let text = render(&table).unwrap();
        assert_eq!(text, "A   | B     | \n-------------\nxyz | 12345 | \n");
    }

    #[test]
    fn test_widths_count_chars_not_bytes() {
        let table = Table::new(["k"]).with_row(vec![CellValue::from("héllo")]);
        assert_eq!(column_widths(&table), vec![5]);
    }

    #[test]
    fn test_padding_for_overlong_value() {
        let mut out = String::new();
        align_value_and_add_separator("abcdef", 4, &mut out);
        assert_eq!(out, "abcdef   | ");

        out.clear();
        align_value_and_add_separator("abcd", 4, &mut out);
        assert_eq!(out, "abcd | ");

        out.clear();
        align_value_and_add_separator("", 3, &mut out);
        assert_eq!(out, "    | ");
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let table = Table::new(["a", "b"])
            .with_row(vec![CellValue::from(1), CellValue::from(2)])
            .with_row(vec![CellValue::from(3)]);
        assert_eq!(
            render(&table),
            Err(TableError::InvalidInput(
                "row 1 has 1 cells, expected 2".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_table() {
        assert_eq!(
            render_optional::<Table>(None),
            Err(TableError::missing_table())
        );
        assert_eq!(
            render_optional(Some(&users())).unwrap(),
            render(&users()).unwrap()
        );
    }

    #[test]
    fn test_header_aligned_when_uppercase_expands() {
        let table = Table::new(["ßeta"]).with_row(vec![CellValue::from("abcd")]);
        let text = render(&table).unwrap();
        assert_eq!(text, "ßeta | \n------\nabcd | \n");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn test_locale_is_threaded_through() {
        let table = Table::new(["ilk_isim"]);
        let renderer = Renderer::new(RenderOptions::new().locale(Locale::Turkish));
        assert_eq!(renderer.render(&table).unwrap(), "İlk İsim | \n----------\n");
        assert_eq!(render(&table).unwrap(), "Ilk Isim | \n----------\n");
    }
}
