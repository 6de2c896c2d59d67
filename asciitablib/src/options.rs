//! Render options.
//!
//! All configuration is passed explicitly; the renderer never consults
//! process-wide locale state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TableError;

/// Separator appended after every cell, header labels included.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Padding character used to fill a cell to its column width.
pub const ALIGN_CHAR: char = ' ';

/// Character repeated to draw the rule under the header.
pub const HEADER_SEPARATOR: char = '-';

/// Casing rules used when title-casing header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Culture-neutral Unicode casing
    #[default]
    Invariant,
    /// Turkish/Azeri casing: `i` upper-cases to `İ`, `I` lower-cases to `ı`
    Turkish,
}

impl Locale {
    /// Title-case a single char. Mappings that would expand to several chars
    /// (`ß` to `SS`) keep the original char so label lengths never change.
    pub(crate) fn to_title(self, c: char) -> char {
        match (self, c) {
            (Locale::Turkish, 'i') => 'İ',
            (_, 'ǆ' | 'ǅ' | 'Ǆ') => 'ǅ',
            (_, 'ǉ' | 'ǈ' | 'Ǉ') => 'ǈ',
            (_, 'ǌ' | 'ǋ' | 'Ǌ') => 'ǋ',
            (_, 'ǳ' | 'ǲ' | 'Ǳ') => 'ǲ',
            _ => single_char(c.to_uppercase(), c),
        }
    }

    /// Lower-case a single char, with the same one-to-one guarantee.
    pub(crate) fn to_lower(self, c: char) -> char {
        match (self, c) {
            (Locale::Turkish, 'I') => 'ı',
            (Locale::Turkish, 'İ') => 'i',
            _ => single_char(c.to_lowercase(), c),
        }
    }
}

fn single_char(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => original,
    }
}

impl FromStr for Locale {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "" | "invariant" | "en" | "en-us" | "en-gb" | "c" => Ok(Locale::Invariant),
            "tr" | "tr-tr" | "az" | "az-az" | "turkish" => Ok(Locale::Turkish),
            _ => Err(TableError::UnknownLocale(s.to_string())),
        }
    }
}

/// Options controlling how a table is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Casing rules for header labels
    pub locale: Locale,
}

impl RenderOptions {
    /// Default options: invariant locale
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the header casing locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("en-US").unwrap(), Locale::Invariant);
        assert_eq!(Locale::from_str("invariant").unwrap(), Locale::Invariant);
        assert_eq!(Locale::from_str("tr_TR").unwrap(), Locale::Turkish);
        assert_eq!(Locale::from_str("AZ").unwrap(), Locale::Turkish);
        assert_eq!(
            Locale::from_str("xx-YY"),
            Err(TableError::UnknownLocale("xx-YY".to_string()))
        );
    }

    #[test]
    fn test_turkish_casing() {
        assert_eq!(Locale::Turkish.to_title('i'), 'İ');
        assert_eq!(Locale::Turkish.to_lower('I'), 'ı');
        assert_eq!(Locale::Turkish.to_lower('İ'), 'i');
        assert_eq!(Locale::Invariant.to_title('i'), 'I');
        assert_eq!(Locale::Invariant.to_lower('I'), 'i');
    }

    #[test]
    fn test_casing_is_one_char_to_one_char() {
        assert_eq!(Locale::Invariant.to_title('ß'), 'ß');
        assert_eq!(Locale::Invariant.to_title('ǆ'), 'ǅ');
        assert_eq!(Locale::Invariant.to_title('Ǳ'), 'ǲ');
        assert_eq!(Locale::Invariant.to_lower('İ'), 'İ');
        assert_eq!(Locale::Invariant.to_lower('Ä'), 'ä');
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new();
        assert_eq!(options.locale, Locale::Invariant);

        let options = RenderOptions::new().locale(Locale::Turkish);
        assert_eq!(options.locale, Locale::Turkish);
    }
}
