//! CRediT (Contributor Roles Taxonomy) statement generation
//!
//! This crate turns a manuscript's author list into CRediT contribution
//! statements and interchange files:
//! - Parsing a pasted, comma-separated author list into name records
//! - Deterministic, collision-free initials
//! - An editable authors-by-roles table
//! - Three paragraph variants (by role, by name, by initials)
//! - JATS4R XML and JSON export and import

pub mod compose;
pub mod error;
pub mod export;
pub mod import;
pub mod initials;
pub mod names;
pub mod role;
pub mod session;
pub mod table;

pub use compose::{compose, compose_by_role, CreditStatements};
pub use error::{CreditError, Result};
pub use export::{export_jats_xml, export_json, ExportPayload, JSON_FILENAME, XML_FILENAME};
pub use import::{import_file, import_jats_xml, import_json, ImportFormat};
pub use initials::{assign_initials, assign_table_initials, duplicate_initials, InitialsAssigner};
pub use names::{parse_author_list, parse_name, split_author_tokens, NameRecord};
pub use role::{role_names, Role, RoleFlags};
pub use session::CreditSession;
pub use table::{AuthorRow, AuthorTable, NameField, Record, POSITION_COLUMN};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
