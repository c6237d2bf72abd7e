//! Author list parsing
//!
//! Turns a free-text, comma-separated author list (as pasted from a
//! manuscript) into structured name records. Affiliation markers, digits and
//! symbols are removed before splitting:
//!
//! ```
//! use credit_core::parse_author_list;
//!
//! let authors = parse_author_list("Kristyna Brejchova1#, Ondrej Kuda5*");
//! assert_eq!(authors[0].surname, "Brejchova");
//! assert_eq!(authors[1].first_name, "Ondrej");
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Anything that is not a letter, comma or whitespace
    static ref NOT_NAME_CHAR: Regex = Regex::new(r"[^\p{L},\s]").unwrap();
    /// Runs of commas
    static ref COMMA_RUN: Regex = Regex::new(r",+").unwrap();
}

/// Structured name of one author
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct NameRecord {
    pub first_name: String,
    pub middle_name: String,
    pub surname: String,
    pub initials: String,
}

impl NameRecord {
    pub fn new(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            surname: surname.into(),
            initials: String::new(),
        }
    }

    /// True when no name part is set
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty() && self.middle_name.is_empty() && self.surname.is_empty()
    }
}

/// Parse a raw author list into name records, one per non-empty author token.
///
/// Parsing is total: any input produces a (possibly empty) list.
pub fn parse_author_list(raw: &str) -> Vec<NameRecord> {
    let records: Vec<NameRecord> = split_author_tokens(raw)
        .iter()
        .map(|token| parse_name(token))
        .collect();
    tracing::debug!("Parsed {} authors from raw list", records.len());
    records
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn parse_author_list_ffi(raw: String) -> Vec<NameRecord> {
    parse_author_list(&raw)
}

/// Clean the raw list and split it into trimmed, non-empty author tokens.
pub fn split_author_tokens(raw: &str) -> Vec<String> {
    let cleaned = NOT_NAME_CHAR.replace_all(raw, "");
    let collapsed = COMMA_RUN.replace_all(&cleaned, ",");
    let list: &str = collapsed.strip_suffix(',').unwrap_or(&collapsed);

    list
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a single author token into a name record.
///
/// - first name: first word
/// - surname: last word, when there are at least two words
/// - middle name: second word, when there are at least three words
///
/// Words between the middle name and the surname are dropped.
pub fn parse_name(token: &str) -> NameRecord {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    let parts: Vec<&str> = cleaned.split_whitespace().collect();

    let first_name = parts.first().copied().unwrap_or_default();
    let middle_name = if parts.len() > 2 { parts[1] } else { "" };
    let surname = if parts.len() > 1 {
        parts[parts.len() - 1]
    } else {
        ""
    };

    let mut record = NameRecord::new(first_name, middle_name, surname);
    record.initials = [first_name, middle_name, surname]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    record
}
