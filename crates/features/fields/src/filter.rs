use crate::registry::FieldRegistry;
use geohint_domain::{CountryRecord, FieldPath, FilterSpec, MatchMode, Value};
use tracing::trace;

impl FieldRegistry {
    /// Whether `record` satisfies `(path, mode, needle)`.
    ///
    /// Comparison is case-insensitive on text forms. Lists match when any
    /// element does. Unresolvable paths and unsupported modes never match.
    #[must_use]
    pub fn matches(&self, path: &FieldPath, record: &CountryRecord, mode: &MatchMode, needle: &str) -> bool {
        let Some(value) = self.resolve(path, record) else {
            return false;
        };
        let needle = needle.to_lowercase();

        match value.as_ref() {
            Value::List(items) => items.iter().any(|item| compare(item, mode, &needle)),
            scalar => compare(scalar, mode, &needle),
        }
    }

    #[must_use]
    pub fn matches_spec(&self, spec: &FilterSpec, record: &CountryRecord) -> bool {
        self.matches(&spec.field, record, &spec.mode, &spec.value)
    }

    /// `true` when every filter matches; an empty filter list passes everything.
    #[must_use]
    pub fn passes_all(&self, filters: &[FilterSpec], record: &CountryRecord) -> bool {
        filters.iter().all(|spec| {
            let matched = self.matches_spec(spec, record);
            if !matched {
                trace!(field = %spec.field, mode = %spec.mode, value = %spec.value, "Filter excluded record");
            }
            matched
        })
    }
}

fn compare(value: &Value, mode: &MatchMode, needle: &str) -> bool {
    let text = value.text_form().to_lowercase();
    match mode {
        MatchMode::Contains => text.contains(needle),
        MatchMode::Equals => text == needle,
        MatchMode::Unsupported(_) => false,
    }
}
