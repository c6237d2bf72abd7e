//! Per-session owner of the author table
//!
//! Front ends (web form, CLI) drive one `CreditSession` per user. Every
//! interaction is a synchronous read-modify-write of the table; failed
//! uploads leave the current table untouched.

use crate::compose::{compose, CreditStatements};
use crate::error::Result;
use crate::export::ExportPayload;
use crate::import::import_file;
use crate::initials::{assign_initials, duplicate_initials};
use crate::names::parse_author_list;
use crate::role::Role;
use crate::table::{AuthorTable, NameField};

#[derive(Debug, Default)]
pub struct CreditSession {
    table: AuthorTable,
}

impl CreditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from an existing table
    pub fn with_table(table: AuthorTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AuthorTable {
        &self.table
    }

    pub fn into_table(self) -> AuthorTable {
        self.table
    }

    /// Replace the table with authors parsed from a raw list
    pub fn read_list(&mut self, raw: &str) -> &AuthorTable {
        let mut records = parse_author_list(raw);
        assign_initials(&mut records);
        self.table = AuthorTable::from_name_records(records);
        &self.table
    }

    /// Replace the table with the contents of an uploaded file
    pub fn upload(&mut self, filename: &str, bytes: &[u8]) -> Result<&AuthorTable> {
        match import_file(filename, bytes) {
            Ok(table) => {
                self.table = table;
                Ok(&self.table)
            }
            Err(e) => {
                tracing::warn!("Upload rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Append a blank author and return its position
    pub fn add_row(&mut self) -> usize {
        self.table.append_blank_row()
    }

    pub fn set_field(&mut self, row_index: usize, field: NameField, value: &str) -> Result<()> {
        self.table.set_field(row_index, field, value)
    }

    pub fn toggle_role(&mut self, row_index: usize, role: Role, value: bool) -> Result<()> {
        self.table.toggle_role(row_index, role, value)
    }

    pub fn statements(&self) -> CreditStatements {
        compose(&self.table)
    }

    pub fn duplicate_initials(&self) -> Vec<String> {
        duplicate_initials(&self.table)
    }

    pub fn export_xml(&self) -> Result<ExportPayload> {
        ExportPayload::xml(&self.table)
    }

    pub fn export_json(&self) -> Result<ExportPayload> {
        ExportPayload::json(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CreditError;

    #[test]
    fn test_read_list_assigns_unique_initials() {
        let mut session = CreditSession::new();
        let table = session.read_list("Jan Novak1, Jan Novak2*");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].initials, "JN");
        assert_eq!(table.rows()[1].initials, "JNo");
    }

    #[test]
    fn test_failed_upload_keeps_table() {
        let mut session = CreditSession::new();
        session.read_list("Eva Hola");
        let err = session.upload("broken.json", b"not json").unwrap_err();
        assert!(matches!(err, CreditError::Parse { .. }));
        assert_eq!(session.table().len(), 1);
        assert_eq!(session.table().rows()[0].last_name, "Hola");
    }

    #[test]
    fn test_edit_cycle() {
        let mut session = CreditSession::new();
        session.read_list("Eva Hola");
        assert_eq!(session.add_row(), 2);
        session.set_field(1, NameField::FirstName, "Tomas").unwrap();
        session.set_field(1, NameField::LastName, "Cajka").unwrap();
        session.set_field(1, NameField::Initials, "TC").unwrap();
        session.toggle_role(1, Role::Resources, true).unwrap();
        session.toggle_role(0, Role::Resources, true).unwrap();

        assert_eq!(session.statements().by_role, "CRediT: Resources: EH, TC");
        assert!(session.set_field(5, NameField::FirstName, "X").is_err());
    }

    #[test]
    fn test_json_upload_of_own_export() {
        let mut session = CreditSession::new();
        session.read_list("Kristyna Brejchova, Ondrej Kuda");
        session.toggle_role(1, Role::Supervision, true).unwrap();
        let payload = session.export_json().unwrap();

        let mut other = CreditSession::new();
        other.upload(&payload.filename, &payload.bytes).unwrap();
        assert_eq!(other.table(), session.table());
    }
}
