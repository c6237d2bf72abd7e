//! CRediT paragraph composition
//!
//! Compiles the table into three statement variants:
//!
//! - by role: `CRediT: Software: KB, OK; Supervision: OK`
//! - by name: `CRediT: Kristyna Brejchova: Software; Ondrej Kuda: Software, Supervision`
//! - by initials: `CRediT: KB: Software; OK: Software, Supervision`
//!
//! Roles and authors without any contribution produce no segment.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::table::{AuthorRow, AuthorTable};

const PREFIX: &str = "CRediT: ";
const SEPARATOR: &str = "; ";

/// The three composed statements
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CreditStatements {
    pub by_role: String,
    pub by_name: String,
    pub by_initials: String,
}

/// Compose all three statements from the current table
pub fn compose(table: &AuthorTable) -> CreditStatements {
    CreditStatements {
        by_role: compose_by_role(table),
        by_name: compose_by_author(table, |row| row.display_name()),
        by_initials: compose_by_author(table, |row| row.initials.clone()),
    }
}

/// One segment per role with at least one holder, listing holders' initials
pub fn compose_by_role(table: &AuthorTable) -> String {
    let segments = Role::ALL.iter().filter_map(|&role| {
        let holders: Vec<&str> = table
            .rows()
            .iter()
            .filter(|row| row.roles.get(role))
            .map(|row| row.initials.as_str())
            .collect();
        if holders.is_empty() {
            None
        } else {
            Some(format!("{}: {}", role, holders.join(", ")))
        }
    });
    finish(segments)
}

/// One segment per contributing author, labelled by `label`
fn compose_by_author<F>(table: &AuthorTable, label: F) -> String
where
    F: Fn(&AuthorRow) -> String,
{
    let segments = table.rows().iter().filter(|row| row.roles.any()).map(|row| {
        let roles: Vec<&str> = row.roles.active().map(Role::as_str).collect();
        format!("{}: {}", label(row), roles.join(", "))
    });
    finish(segments)
}

fn finish(segments: impl Iterator<Item = String>) -> String {
    let body: Vec<String> = segments.collect();
    format!("{}{}", PREFIX, body.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initials::assign_table_initials;
    use crate::names::parse_author_list;

    fn table(raw: &str) -> AuthorTable {
        let mut table = AuthorTable::from_name_records(parse_author_list(raw));
        assign_table_initials(&mut table);
        table
    }

    #[test]
    fn test_single_software_author() {
        let mut t = table("Kristyna Brejchova");
        t.toggle_role(0, Role::Software, true).unwrap();
        let statements = compose(&t);
        assert_eq!(statements.by_role, "CRediT: Software: KB");
        assert_eq!(statements.by_name, "CRediT: Kristyna Brejchova: Software");
        assert_eq!(statements.by_initials, "CRediT: KB: Software");
    }

    #[test]
    fn test_roles_in_taxonomy_order_and_authors_in_table_order() {
        let mut t = table("Kristyna Brejchova, Lucie Rudl Kulhava, Ondrej Kuda");
        t.toggle_role(2, Role::Supervision, true).unwrap();
        t.toggle_role(2, Role::Conceptualization, true).unwrap();
        t.toggle_role(0, Role::Investigation, true).unwrap();
        t.toggle_role(2, Role::Investigation, true).unwrap();

        let statements = compose(&t);
        assert_eq!(
            statements.by_role,
            "CRediT: Conceptualization: OK; Investigation: KB, OK; Supervision: OK"
        );
        assert_eq!(
            statements.by_name,
            "CRediT: Kristyna Brejchova: Investigation; \
             Ondrej Kuda: Conceptualization, Investigation, Supervision"
        );
        assert_eq!(
            statements.by_initials,
            "CRediT: KB: Investigation; OK: Conceptualization, Investigation, Supervision"
        );
    }

    #[test]
    fn test_middle_name_in_label() {
        let mut t = table("Lucie Rudl Kulhava");
        t.toggle_role(0, Role::WritingReviewEditing, true).unwrap();
        assert_eq!(
            compose(&t).by_name,
            "CRediT: Lucie Rudl Kulhava: Writing – review & editing"
        );
    }

    #[test]
    fn test_no_contributions() {
        let statements = compose(&table("Jan Novak, Eva Hola"));
        assert_eq!(statements.by_role, "CRediT: ");
        assert_eq!(statements.by_name, "CRediT: ");
        assert_eq!(statements.by_initials, "CRediT: ");
    }
}
