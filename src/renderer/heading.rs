//! Localized date headings and RTF character escaping

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::{ChecklistError, Result};

/// Scandinavian letters and their RTF hex escapes. The second group is the
/// same letters after UTF-8 bytes were mis-decoded as Windows-1252, which
/// happens when the config is written from a Windows shell.
const RTF_ESCAPES: [(&str, &str); 12] = [
    ("æ", "\\'e6"),
    ("ø", "\\'f8"),
    ("å", "\\'e5"),
    ("Æ", "\\'c6"),
    ("Ø", "\\'d8"),
    ("Å", "\\'c5"),
    ("Ã¦", "\\'e6"),
    ("Ã¸", "\\'f8"),
    ("Ã¥", "\\'e5"),
    ("Ã†", "\\'c6"),
    ("Ã˜", "\\'d8"),
    ("Ã…", "\\'c5"),
];

/// Fill the heading template for a date
pub fn format_heading(config: &Config, date: NaiveDate) -> Result<String> {
    let day = translate(config, &date.format("%A").to_string())?;
    let month = translate(config, &date.format("%B").to_string())?;

    Ok(config
        .heading
        .replace("DAY", day)
        .replace("MONTH", month)
        .replace("DATE", &date.format("%-d").to_string()))
}

fn translate<'a>(config: &'a Config, name: &str) -> Result<&'a str> {
    config
        .translations
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ChecklistError::Config(format!("Missing translation for '{}'", name)))
}

/// Make text safe for an `\ansi` RTF body: control characters are
/// backslash-escaped, Scandinavian letters get their hex escapes and any
/// other non-ASCII character becomes a `\uN?` Unicode escape
pub fn escape_rtf(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    let escaped = RTF_ESCAPES
        .iter()
        .fold(escaped, |acc, (from, to)| acc.replace(from, to));

    if escaped.is_ascii() {
        return escaped;
    }

    let mut output = String::with_capacity(escaped.len());
    let mut units = [0u16; 2];
    for ch in escaped.chars() {
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }
        // \u takes a signed 16-bit value; astral characters need both halves
        for unit in ch.encode_utf16(&mut units) {
            output.push_str(&format!("\\u{}?", *unit as i16));
        }
    }
    output
}
