//! Author list parsing and initials scenarios

use credit_core::{assign_initials, parse_author_list, parse_name, NameRecord};
use rstest::rstest;

// === Raw List Parsing ===

#[test]
fn test_affiliation_markers_removed() {
    let records = parse_author_list("Kristyna Brejchova1#, Veronika Paluchova2, Ondrej Kuda5*");
    let names: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.first_name.as_str(), r.surname.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("Kristyna", "Brejchova"),
            ("Veronika", "Paluchova"),
            ("Ondrej", "Kuda")
        ]
    );
}

#[rstest]
#[case("Tomas Cajka1#", "Tomas", "", "Cajka")]
#[case("Lucie Rudl Kulhava1", "Lucie", "Rudl", "Kulhava")]
#[case("  Oliver   Fiehn2 ", "Oliver", "", "Fiehn")]
#[case("Anna Maria Teresa Novakova", "Anna", "Maria", "Novakova")]
#[case("Madonna", "Madonna", "", "")]
#[case("J. R. R. Tolkien", "J", "R", "Tolkien")]
#[case("Mary-Jane O'Neil", "MaryJane", "", "ONeil")]
#[case("✉", "", "", "")]
fn test_parse_name_cases(
    #[case] token: &str,
    #[case] first: &str,
    #[case] middle: &str,
    #[case] surname: &str,
) {
    let record = parse_name(token);
    assert_eq!(record.first_name, first);
    assert_eq!(record.middle_name, middle);
    assert_eq!(record.surname, surname);
}

#[rstest]
#[case("", 0)]
#[case(",,,", 0)]
#[case("Jan Novak", 1)]
#[case("Jan Novak,", 1)]
#[case("Jan Novak,,Eva Hola", 2)]
#[case("Jan Novak, , Eva Hola, ", 2)]
#[case("Jan Novak1*, Eva Hola2#, Tomas Cajka3", 3)]
fn test_author_counts(#[case] raw: &str, #[case] expected: usize) {
    assert_eq!(parse_author_list(raw).len(), expected);
}

#[test]
fn test_placeholder_initials_from_retained_parts() {
    let records = parse_author_list("Anna Maria Teresa Novakova, ondrej kuda");
    assert_eq!(records[0].initials, "AMN");
    assert_eq!(records[1].initials, "OK");
}

// === Initials ===

#[test]
fn test_two_jan_novaks_get_distinct_initials() {
    let mut records = parse_author_list("Jan Novak, Jan Novak");
    assign_initials(&mut records);
    assert_eq!(records[0].initials, "JN");
    assert_ne!(records[0].initials, records[1].initials);
    assert!(records[1].initials.starts_with("JN"));
    assert!(records[1].initials.len() > records[0].initials.len());
}

#[rstest]
#[case(&[("Jan", "", "Novak"), ("Jana", "", "Nemcova")], &["JN", "JNe"])]
#[case(&[("Jan", "", "Novak"), ("Jiri", "", "Novak"), ("Josef", "", "Novak")], &["JN", "JNo", "JNoo"])]
#[case(&[("Eva", "Marie", "Hola"), ("Eva", "", "Hola")], &["EMH", "EH"])]
#[case(&[("Bo", "", "Xu"), ("Bo", "", "Xu"), ("Bo", "", "Xu"), ("Bo", "", "Xu")], &["BX", "BXu", "BXuu", "BXuu3"])]
fn test_initials_sequences(#[case] names: &[(&str, &str, &str)], #[case] expected: &[&str]) {
    let mut records: Vec<NameRecord> = names
        .iter()
        .map(|(f, m, s)| NameRecord::new(*f, *m, *s))
        .collect();
    assign_initials(&mut records);
    let initials: Vec<&str> = records.iter().map(|r| r.initials.as_str()).collect();
    assert_eq!(initials, expected);
}

#[test]
fn test_reordering_may_change_initials() {
    let mut forward = parse_author_list("Jan Novak, Jiri Novak");
    let mut backward = parse_author_list("Jiri Novak, Jan Novak");
    assign_initials(&mut forward);
    assign_initials(&mut backward);
    assert_eq!(forward[0].initials, "JN");
    assert_eq!(backward[0].initials, "JN");
    assert_eq!(forward[0].first_name, "Jan");
    assert_eq!(backward[0].first_name, "Jiri");
}
