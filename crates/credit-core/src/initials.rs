//! Unique initials generation
//!
//! Initials are recomputed, not persisted identifiers: reordering authors and
//! re-running assignment may give the same person different initials.

use std::collections::{BTreeMap, HashSet};

use crate::names::NameRecord;
use crate::table::AuthorTable;

/// Issues initials that are unique within one assignment run.
#[derive(Debug, Default)]
pub struct InitialsAssigner {
    issued: HashSet<String>,
}

impl InitialsAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and reserve initials for one author.
    ///
    /// Returns an empty string, without reserving it, when all name parts are
    /// empty.
    pub fn issue(&mut self, first_name: &str, middle_name: &str, surname: &str) -> String {
        let base = base_initials(first_name, middle_name, surname);
        if base.is_empty() {
            return base;
        }

        let surname_len = surname.chars().count();
        let second_letter = surname.chars().nth(1).map(|c| c.to_lowercase().to_string());

        let mut candidate = base;
        while self.issued.contains(&candidate) {
            match &second_letter {
                Some(letter) if candidate.chars().count() < 2 + surname_len => {
                    candidate.push_str(letter);
                }
                _ => candidate.push_str(&self.issued.len().to_string()),
            }
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}

/// Uppercased first letters of first, middle and surname
fn base_initials(first_name: &str, middle_name: &str, surname: &str) -> String {
    [first_name, middle_name, surname]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Assign unique initials to every record, in order.
pub fn assign_initials(records: &mut [NameRecord]) {
    let mut assigner = InitialsAssigner::new();
    for record in records.iter_mut() {
        record.initials = assigner.issue(&record.first_name, &record.middle_name, &record.surname);
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn assign_initials_ffi(mut records: Vec<NameRecord>) -> Vec<NameRecord> {
    assign_initials(&mut records);
    records
}

/// Recompute the initials of every row of a table, in row order.
pub fn assign_table_initials(table: &mut AuthorTable) {
    let mut assigner = InitialsAssigner::new();
    for row in table.rows_mut() {
        row.initials = assigner.issue(&row.first_name, &row.middle_name, &row.last_name);
    }
}

/// Initials carried by more than one row, sorted.
///
/// Assignment never produces duplicates, but manual edits of the initials
/// column can.
pub fn duplicate_initials(table: &AuthorTable) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in table.rows() {
        if !row.initials.is_empty() {
            *counts.entry(row.initials.as_str()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(initials, _)| initials.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::NameField;

    fn records(names: &[(&str, &str, &str)]) -> Vec<NameRecord> {
        names
            .iter()
            .map(|(f, m, s)| NameRecord::new(*f, *m, *s))
            .collect()
    }

    #[test]
    fn test_distinct_names_get_base_initials() {
        let mut authors = records(&[
            ("Kristyna", "", "Brejchova"),
            ("Lucie", "Rudl", "Kulhava"),
            ("Ondrej", "", "Kuda"),
        ]);
        assign_initials(&mut authors);
        let initials: Vec<&str> = authors.iter().map(|a| a.initials.as_str()).collect();
        assert_eq!(initials, vec!["KB", "LRK", "OK"]);
    }

    #[test]
    fn test_same_name_gets_surname_letter() {
        let mut authors = records(&[("Jan", "", "Novak"), ("Jan", "", "Novak")]);
        assign_initials(&mut authors);
        assert_eq!(authors[0].initials, "JN");
        assert_eq!(authors[1].initials, "JNo");
    }

    #[test]
    fn test_repeated_collisions_keep_growing() {
        let mut authors = records(&[
            ("Jan", "", "Novak"),
            ("Jan", "", "Novak"),
            ("Jan", "", "Novak"),
        ]);
        assign_initials(&mut authors);
        assert_eq!(authors[2].initials, "JNoo");
    }

    #[test]
    fn test_short_surname_repeats_second_letter() {
        // "Li": letters are appended while the candidate is shorter than 4
        let mut authors = records(&[("Wei", "", "Li"), ("Wei", "", "Li"), ("Wei", "", "Li")]);
        assign_initials(&mut authors);
        assert_eq!(authors[0].initials, "WL");
        assert_eq!(authors[1].initials, "WLi");
        assert_eq!(authors[2].initials, "WLii");
    }

    #[test]
    fn test_counter_suffix_after_surname_exhausted() {
        let mut assigner = InitialsAssigner::new();
        assert_eq!(assigner.issue("Ann", "", "Yu"), "AY");
        assert_eq!(assigner.issue("Ann", "", "Yu"), "AYu");
        assert_eq!(assigner.issue("Ann", "", "Yu"), "AYuu");
        // length 4 == 2 + len("Yu"), counter is the number of issued initials
        assert_eq!(assigner.issue("Ann", "", "Yu"), "AYuu3");
    }

    #[test]
    fn test_no_surname_uses_counter() {
        let mut assigner = InitialsAssigner::new();
        assert_eq!(assigner.issue("Plato", "", ""), "P");
        assert_eq!(assigner.issue("Plato", "", ""), "P1");
    }

    #[test]
    fn test_blank_name_is_not_reserved() {
        let mut authors = records(&[("", "", ""), ("", "", ""), ("Eva", "", "Hola")]);
        assign_initials(&mut authors);
        assert_eq!(authors[0].initials, "");
        assert_eq!(authors[1].initials, "");
        assert_eq!(authors[2].initials, "EH");
    }

    #[test]
    fn test_table_initials_and_duplicates() {
        let mut table = AuthorTable::from_name_records(records(&[
            ("Jan", "", "Novak"),
            ("Jana", "", "Nova"),
        ]));
        assign_table_initials(&mut table);
        assert_eq!(table.rows()[0].initials, "JN");
        assert_eq!(table.rows()[1].initials, "JNo");
        assert!(duplicate_initials(&table).is_empty());

        table.set_field(1, NameField::Initials, "JN").unwrap();
        assert_eq!(duplicate_initials(&table), vec!["JN".to_string()]);
    }
}
