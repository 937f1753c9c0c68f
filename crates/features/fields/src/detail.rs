use crate::builtin::StreetTermsField;
use crate::registry::FieldRegistry;
use geohint_domain::{CountryRecord, FieldPath, Value};
use geohint_kernel::markup::escape;
use geohint_streets::NO_STREET_TERMS;
use serde::Serialize;
use std::borrow::Cow;

const EXCLUDED: [&str; 2] = ["flag", "latlng"];

const FRIENDLY_NAMES: [(&str, &str); 8] = [
    ("language", "Language"),
    ("tld", "Domain"),
    ("gdp_per_capita", "GDP per capita"),
    ("number_plate", "Number Plate"),
    ("crosswalk_stripes", "Crosswalk Stripes"),
    ("crosswalk_features", "Crosswalk Features"),
    ("sign_back", "Sign Back"),
    ("camera", "Camera"),
];

/// One `title: body` line of a country's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: Cow<'static, str>,
    pub body: String,
}

/// Human title for an attribute key: a fixed name for known keys, else the
/// key with underscores as spaces and each word capitalised.
#[must_use]
pub fn friendly_name(key: &str) -> Cow<'static, str> {
    if let Some((_, name)) = FRIENDLY_NAMES.iter().find(|(k, _)| *k == key) {
        return Cow::Borrowed(*name);
    }
    let words: Vec<String> = key
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect();
    Cow::Owned(words.join(" "))
}

impl FieldRegistry {
    /// Everything worth showing about a country, in order: street terms,
    /// scalar and list attributes, flag description, coordinates.
    #[must_use]
    pub fn detail_sections(&self, record: &CountryRecord) -> Vec<DetailSection> {
        let mut sections = Vec::new();

        let streets = FieldPath::parse(StreetTermsField::NAME);
        if let Some(summary) = self.resolve(&streets, record)
            && let Some(text) = summary.as_text()
            && !text.is_empty()
            && text != NO_STREET_TERMS
        {
            sections.push(DetailSection { title: Cow::Borrowed("Street Terms"), body: text.to_owned() });
        }

        for (key, value) in record {
            if EXCLUDED.contains(&key.as_str()) || matches!(value, Value::Nested(_)) {
                continue;
            }
            let body = value.text_form();
            if !body.is_empty() {
                sections.push(DetailSection { title: friendly_name(key), body: body.into_owned() });
            }
        }

        if let Some(description) = record
            .get("flag")
            .and_then(|flag| flag.get("description"))
            .filter(|d| d.is_truthy())
        {
            sections.push(DetailSection { title: Cow::Borrowed("Flag"), body: description.to_string() });
        }

        if let Some([lat, lng]) = record.get("latlng").and_then(Value::as_list) {
            sections.push(DetailSection { title: Cow::Borrowed("Coordinates"), body: format!("{lat}, {lng}") });
        }

        sections
    }

    /// [`Self::detail_sections`] as an HTML body, sections separated by a blank line.
    #[must_use]
    pub fn detail_html(&self, record: &CountryRecord) -> String {
        self.detail_sections(record)
            .iter()
            .map(|s| format!("<b>{}:</b> {}", escape(&s.title), escape(&s.body)))
            .collect::<Vec<_>>()
            .join("<br><br>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friendly_names() {
        assert_eq!(friendly_name("tld"), "Domain");
        assert_eq!(friendly_name("driving_side"), "Driving Side");
        assert_eq!(friendly_name("bollard_COLOR"), "Bollard Color");
    }
}
