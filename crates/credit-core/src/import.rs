//! Import of previously exported (or third-party) author tables
//!
//! Two formats are accepted:
//! - JSON: an array of flat row objects keyed by column name
//! - JATS XML: every `contrib` element with `given-names`, `surname` and `role`
//!
//! Positions are always re-derived from order. Failures are reported as
//! [`CreditError::Parse`] carrying the offending filename.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::Value;

use crate::error::{CreditError, Result};
use crate::initials::{assign_table_initials, InitialsAssigner};
use crate::role::{Role, RoleFlags};
use crate::table::{AuthorRow, AuthorTable, NameField, POSITION_COLUMN};

/// Upload formats understood by [`import_file`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    JatsXml,
}

impl ImportFormat {
    /// Detect the format from a filename extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Option<ImportFormat> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".json") {
            Some(ImportFormat::Json)
        } else if lower.ends_with(".xml") {
            Some(ImportFormat::JatsXml)
        } else {
            None
        }
    }
}

/// Import an uploaded file, choosing the decoder by extension
pub fn import_file(filename: &str, bytes: &[u8]) -> Result<AuthorTable> {
    match ImportFormat::from_filename(filename) {
        Some(ImportFormat::Json) => import_json(filename, bytes),
        Some(ImportFormat::JatsXml) => import_jats_xml(filename, bytes),
        None => Err(CreditError::parse(
            filename,
            "unsupported file type, expected .json or .xml",
        )),
    }
}

/// Decode a JSON array of row objects.
///
/// Initials present in the file are kept; if any row has no `Initials` key
/// the initials of the whole table are recomputed.
pub fn import_json(filename: &str, bytes: &[u8]) -> Result<AuthorTable> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| CreditError::parse(filename, e.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| CreditError::parse(filename, "expected a JSON array of author objects"))?;

    let mut table = AuthorTable::new();
    let mut has_initials = true;
    for (i, item) in items.iter().enumerate() {
        let record = item.as_object().ok_or_else(|| {
            CreditError::parse(filename, format!("entry {} is not a JSON object", i + 1))
        })?;

        for key in record.keys() {
            if key != POSITION_COLUMN
                && NameField::from_column(key).is_none()
                && Role::from_display_name(key).is_none()
            {
                tracing::debug!("Ignoring unknown column {:?} in {}", key, filename);
            }
        }

        has_initials &= record.contains_key(NameField::Initials.column());
        table.push_row(AuthorRow::from_record(i + 1, record));
    }

    if !has_initials {
        tracing::debug!("{} has no initials column, deriving initials", filename);
        assign_table_initials(&mut table);
    }

    tracing::debug!("Imported {} authors from {}", table.len(), filename);
    Ok(table)
}

/// Name element currently being read inside a `contrib`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Capture {
    GivenNames,
    Surname,
    Role,
}

impl Capture {
    fn from_element(name: &[u8]) -> Option<Capture> {
        match name {
            b"given-names" => Some(Capture::GivenNames),
            b"surname" => Some(Capture::Surname),
            b"role" => Some(Capture::Role),
            _ => None,
        }
    }
}

/// Fields collected from one `contrib` element
#[derive(Debug, Default)]
struct Contributor {
    given_names: Option<String>,
    surname: Option<String>,
    roles: RoleFlags,
}

impl Contributor {
    fn finish_capture(&mut self, capture: Capture, text: &str, filename: &str) {
        match capture {
            Capture::GivenNames => {
                self.given_names.get_or_insert_with(|| text.to_string());
            }
            Capture::Surname => {
                self.surname.get_or_insert_with(|| text.to_string());
            }
            Capture::Role => match Role::from_display_name(text.trim()) {
                Some(role) => self.roles.set(role, true),
                None => tracing::warn!("Skipping unknown CRediT role {:?} in {}", text, filename),
            },
        }
    }
}

/// Decode a JATS(4R) document. Initials are always recomputed in document
/// order; missing name elements default to empty strings.
pub fn import_jats_xml(filename: &str, bytes: &[u8]) -> Result<AuthorTable> {
    let xml = std::str::from_utf8(bytes)
        .map_err(|e| CreditError::parse(filename, format!("invalid UTF-8: {}", e)))?;

    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut contrib_depth = 0usize;
    let mut seen_root = false;
    let mut contributors: Vec<Contributor> = Vec::new();
    let mut current: Option<Contributor> = None;
    let mut capture: Option<Capture> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                seen_root = true;
                let local = e.local_name();
                let name = local.as_ref();
                if name == b"contrib" {
                    contrib_depth += 1;
                    if current.is_none() {
                        current = Some(Contributor::default());
                    }
                } else if current.is_some() && capture.is_none() {
                    capture = Capture::from_element(name);
                    text.clear();
                }
            }
            Ok(Event::Empty(ref e)) => {
                seen_root = true;
                let local = e.local_name();
                if let (Some(contributor), None) = (current.as_mut(), capture) {
                    if let Some(empty) = Capture::from_element(local.as_ref()) {
                        contributor.finish_capture(empty, "", filename);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                depth = depth.saturating_sub(1);
                let local = e.local_name();
                let name = local.as_ref();
                if name == b"contrib" {
                    // nested contribs belong to the outermost one
                    contrib_depth = contrib_depth.saturating_sub(1);
                    if contrib_depth == 0 {
                        if let Some(contributor) = current.take() {
                            contributors.push(contributor);
                        }
                    }
                    capture = None;
                } else if let Some(active) = capture {
                    if Capture::from_element(name) == Some(active) {
                        if let Some(contributor) = current.as_mut() {
                            contributor.finish_capture(active, &text, filename);
                        }
                        capture = None;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if capture.is_some() {
                    let unescaped = e
                        .unescape()
                        .map_err(|err| CreditError::parse(filename, err.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if capture.is_some() {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(CreditError::parse(
                    filename,
                    format!(
                        "XML parse error at position {}: {}",
                        reader.buffer_position(),
                        e
                    ),
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(CreditError::parse(filename, "document has no root element"));
    }
    if depth != 0 {
        return Err(CreditError::parse(filename, "unexpected end of document"));
    }

    let mut assigner = InitialsAssigner::new();
    let mut table = AuthorTable::new();
    for contributor in contributors {
        let given = contributor.given_names.unwrap_or_default();
        let mut given_parts = given.split_whitespace();
        let first_name = given_parts.next().unwrap_or_default().to_string();
        let middle_name = given_parts.next().unwrap_or_default().to_string();
        let last_name = contributor.surname.unwrap_or_default().trim().to_string();

        let initials = assigner.issue(&first_name, &middle_name, &last_name);
        table.push_row(AuthorRow {
            position: 0,
            first_name,
            middle_name,
            last_name,
            initials,
            roles: contributor.roles,
        });
    }

    tracing::debug!("Imported {} contributors from {}", table.len(), filename);
    Ok(table)
}
