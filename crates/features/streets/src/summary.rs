use geohint_domain::Value;

/// Displayed when none of a record's languages has street terms.
/// Callers compare against it to detect "nothing to show", so it must not change.
pub const NO_STREET_TERMS: &str = "No street terms available";

/// How many terms and abbreviations per language the summary shows.
pub const SUMMARY_DEPTH: usize = 3;

/// Language names carried by a record's `language` attribute.
///
/// A list yields its text elements in order; a lone text value is one
/// language; anything else yields nothing.
#[must_use]
pub fn languages_of(value: &Value) -> Vec<&str> {
    match value {
        Value::Text(language) => vec![language.as_str()],
        Value::List(items) => items.iter().filter_map(Value::as_text).collect(),
        _ => Vec::new(),
    }
}
