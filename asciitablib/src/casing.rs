//! Header label casing.
//!
//! Column names like `first_name` become `First Name`: underscores turn into
//! spaces, then every word is title-cased. Words written entirely in upper
//! case (`ID`, `URL`) are treated as acronyms and left alone.

use crate::options::Locale;

/// Turn a raw column name into a display label.
pub fn humanize_header(name: &str, locale: Locale) -> String {
    to_title_case(&name.replace('_', " "), locale)
}

/// Title-case `text`: first char of each word upper-cased, the rest lower-cased.
///
/// Words are runs of alphanumeric characters; an apostrophe between two
/// word characters (`don't`) does not start a new word.
pub fn to_title_case(text: &str, locale: Locale) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_alphanumeric() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && (chars[i].is_alphanumeric() || is_inner_apostrophe(&chars, i)) {
            i += 1;
        }
        push_word(&chars[start..i], locale, &mut out);
    }

    out
}

fn is_inner_apostrophe(chars: &[char], i: usize) -> bool {
    chars[i] == '\''
        && i > 0
        && chars[i - 1].is_alphanumeric()
        && chars.get(i + 1).is_some_and(|c| c.is_alphanumeric())
}

fn is_acronym(word: &[char]) -> bool {
    let mut letters = word.iter().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}

fn push_word(word: &[char], locale: Locale, out: &mut String) {
    if is_acronym(word) {
        out.extend(word);
        return;
    }

    // Leading digits pass through; the first letter is the one title-cased.
    let first_letter = word.iter().position(|c| c.is_alphabetic());
    for (i, &c) in word.iter().enumerate() {
        match first_letter {
            Some(pos) if i < pos => out.push(c),
            Some(pos) if i == pos => out.push(locale.to_title(c)),
            _ => out.push(locale.to_lower(c)),
        }
    }
}
