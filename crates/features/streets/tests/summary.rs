use geohint_domain::Value;
use geohint_streets::{NO_STREET_TERMS, StreetTermTable, StreetTerms, TableError, languages_of};
use proptest::prelude::*;
use serde_json::json;

fn sample_table() -> StreetTermTable {
    StreetTermTable::from_entries([
        (
            "English",
            StreetTerms::new(["Street", "Road", "Avenue", "Lane"], ["St", "Rd", "Ave", "Ln"]),
        ),
        (
            "French",
            StreetTerms::new(["Rue", "Avenue", "Boulevard", "Place"], ["R.", "Ave", "Bd", "Pl"]),
        ),
    ])
    .expect("valid table")
}

#[test]
fn summary_joins_languages_in_record_order() {
    let table = sample_table();
    assert_eq!(
        table.summary(["English", "French"]),
        "English: Street, Road, Avenue (St, Rd, Ave) | French: Rue, Avenue, Boulevard (R., Ave, Bd)"
    );
    assert_eq!(
        table.summary(["French", "English"]),
        "French: Rue, Avenue, Boulevard (R., Ave, Bd) | English: Street, Road, Avenue (St, Rd, Ave)"
    );
}

#[test]
fn summary_falls_back_to_the_sentinel() {
    let table = sample_table();
    assert_eq!(table.summary([]), NO_STREET_TERMS);
    assert_eq!(table.summary(["Klingon", "english"]), "No street terms available");
}

#[test]
fn unknown_languages_are_skipped_and_repeats_collapse() {
    let table = sample_table();
    assert_eq!(
        table.summary(["Klingon", "French", "French"]),
        "French: Rue, Avenue, Boulevard (R., Ave, Bd)"
    );
}

#[test]
fn builtin_table_matches_the_shipped_vocabulary() {
    let table = StreetTermTable::builtin();
    assert_eq!(table.len(), 49);
    assert_eq!(
        table.summary(["Spanish"]),
        "Spanish: Calle, Avenida, Plaza (C/, Av., Pza.)"
    );
    assert_eq!(
        table.summary(["Japanese", "Korean"]),
        "Japanese: 通り, 街道, 大通り (通, 街道, 大通) | Korean: 길, 대로, 로 (길, 대로, 로)"
    );
}

#[test]
fn summary_reads_a_record_language_attribute() {
    let table = StreetTermTable::builtin();
    let languages = Value::from(vec!["Dutch", "Frisian"]);
    assert_eq!(
        table.summary(languages_of(&languages)),
        "Dutch: Straat, Laan, Plein (Str., Ln., Pl.)"
    );
}

#[test]
fn tables_deserialize_and_validate_external_data() {
    let raw = json!({
        "Esperanto": { "street": ["Strato", "Avenuo"], "abbreviations": ["str."] }
    });
    let table: StreetTermTable = serde_json::from_value(raw).expect("table deserialize");
    assert_eq!(table.summary(["Esperanto"]), "Esperanto: Strato, Avenuo (str.)");

    let empty = json!({ "Esperanto": { "street": [] } });
    let err = serde_json::from_value::<StreetTermTable>(empty).expect_err("empty terms rejected");
    assert!(err.to_string().contains("no terms"));
}

#[test]
fn table_errors_carry_context() {
    use geohint_streets::TableErrorExt;

    let res = StreetTermTable::from_entries([("", StreetTerms::new(["Via"], ["V."]))]);
    let err = res.context("Loading overrides").expect_err("blank name rejected");
    assert!(matches!(err, TableError::MissingLanguage { context: Some(_) }));
    assert_eq!(err.to_string(), "Street table entry without a language name (Loading overrides)");
}

proptest! {
    #[test]
    fn summary_is_total_and_never_empty(languages in proptest::collection::vec("[A-Za-z]{0,10}", 0..6)) {
        let table = StreetTermTable::builtin();
        let summary = table.summary(languages.iter().map(String::as_str));
        prop_assert!(!summary.is_empty());
        let again = table.summary(languages.iter().map(String::as_str));
        prop_assert_eq!(summary, again);
    }
}
