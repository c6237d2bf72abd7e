//! The authors-by-roles table
//!
//! An ordered list of author rows, each carrying name fields and one flag per
//! CRediT role. Row positions are 1-based and always match row order.

use serde_json::{Map, Value};

use crate::error::{CreditError, Result};
use crate::names::NameRecord;
use crate::role::{Role, RoleFlags};

/// Column holding the 1-based row position
pub const POSITION_COLUMN: &str = "Position";

/// One flat row at the serialization boundary: column name to cell value,
/// in column order
pub type Record = Map<String, Value>;

/// Editable name columns of a row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameField {
    FirstName,
    MiddleName,
    LastName,
    Initials,
}

impl NameField {
    /// Name columns in table order
    pub const ALL: [NameField; 4] = [
        NameField::FirstName,
        NameField::MiddleName,
        NameField::LastName,
        NameField::Initials,
    ];

    /// Column header, also the JSON key
    pub fn column(self) -> &'static str {
        match self {
            NameField::FirstName => "First Name",
            NameField::MiddleName => "Middle Name",
            NameField::LastName => "Last Name",
            NameField::Initials => "Initials",
        }
    }

    pub fn from_column(column: &str) -> Option<NameField> {
        NameField::ALL.iter().copied().find(|f| f.column() == column)
    }
}

/// One author and their role flags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorRow {
    pub position: usize,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub initials: String,
    pub roles: RoleFlags,
}

impl AuthorRow {
    /// Row with empty name fields and no roles
    pub fn blank(position: usize) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn from_name_record(position: usize, record: NameRecord) -> Self {
        Self {
            position,
            first_name: record.first_name,
            middle_name: record.middle_name,
            last_name: record.surname,
            initials: record.initials,
            roles: RoleFlags::new(),
        }
    }

    pub fn field(&self, field: NameField) -> &str {
        match field {
            NameField::FirstName => &self.first_name,
            NameField::MiddleName => &self.middle_name,
            NameField::LastName => &self.last_name,
            NameField::Initials => &self.initials,
        }
    }

    fn field_mut(&mut self, field: NameField) -> &mut String {
        match field {
            NameField::FirstName => &mut self.first_name,
            NameField::MiddleName => &mut self.middle_name,
            NameField::LastName => &mut self.last_name,
            NameField::Initials => &mut self.initials,
        }
    }

    /// First, middle and last name joined by single spaces, skipping empty parts
    /// and collapsing whitespace inside edited fields
    pub fn display_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .flat_map(|s| s.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Given names as written to JATS: first and middle name, or first alone
    pub fn given_names(&self) -> String {
        if self.middle_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.middle_name)
        }
    }

    /// Flat record of this row, with or without the position column
    pub fn to_record(&self, include_position: bool) -> Record {
        let mut record = Record::new();
        if include_position {
            record.insert(POSITION_COLUMN.to_string(), Value::from(self.position));
        }
        for field in NameField::ALL {
            record.insert(
                field.column().to_string(),
                Value::String(self.field(field).to_string()),
            );
        }
        for (role, on) in self.roles.iter() {
            record.insert(role.as_str().to_string(), Value::Bool(on));
        }
        record
    }

    /// Build a row from a flat record. Missing columns default to empty or
    /// false; unknown columns are ignored.
    pub fn from_record(position: usize, record: &Record) -> Self {
        let mut row = AuthorRow::blank(position);
        for field in NameField::ALL {
            *row.field_mut(field) = record.get(field.column()).map(cell_text).unwrap_or_default();
        }
        for role in Role::ALL {
            let on = record.get(role.as_str()).map(cell_flag).unwrap_or(false);
            row.roles.set(role, on);
        }
        row
    }
}

/// Text content of a name cell
pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Truth value of a role cell
pub(crate) fn cell_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1"),
        _ => false,
    }
}

/// Ordered authors-by-roles table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorTable {
    rows: Vec<AuthorRow>,
}

impl AuthorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per record, in order, with all roles off
    pub fn from_name_records(records: Vec<NameRecord>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| AuthorRow::from_name_record(i + 1, record))
            .collect();
        Self { rows }
    }

    /// Column headers in table order
    pub fn columns() -> Vec<&'static str> {
        let mut columns = vec![POSITION_COLUMN];
        columns.extend(NameField::ALL.iter().map(|f| f.column()));
        columns.extend(Role::ALL.iter().map(|r| r.as_str()));
        columns
    }

    pub fn rows(&self) -> &[AuthorRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [AuthorRow] {
        &mut self.rows
    }

    pub fn row(&self, index: usize) -> Result<&AuthorRow> {
        let len = self.rows.len();
        self.rows.get(index).ok_or(CreditError::Index { index, len })
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut AuthorRow> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(CreditError::Index { index, len })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, renumbering it to the next position
    pub fn push_row(&mut self, mut row: AuthorRow) {
        row.position = self.rows.len() + 1;
        self.rows.push(row);
    }

    /// Append an empty row and return its position
    pub fn append_blank_row(&mut self) -> usize {
        let position = self.rows.len() + 1;
        self.rows.push(AuthorRow::blank(position));
        position
    }

    /// Update one name field of one row (0-based index)
    pub fn set_field(&mut self, row_index: usize, field: NameField, value: impl Into<String>) -> Result<()> {
        *self.row_mut(row_index)?.field_mut(field) = value.into();
        Ok(())
    }

    /// Set one role flag of one row (0-based index)
    pub fn toggle_role(&mut self, row_index: usize, role: Role, value: bool) -> Result<()> {
        self.row_mut(row_index)?.roles.set(role, value);
        Ok(())
    }

    /// Flat records including the position column
    pub fn to_records(&self) -> Vec<Record> {
        self.rows.iter().map(|row| row.to_record(true)).collect()
    }

    /// Rebuild a table from flat records; positions follow record order
    pub fn from_records(records: &[Record]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| AuthorRow::from_record(i + 1, record))
            .collect();
        Self { rows }
    }
}
