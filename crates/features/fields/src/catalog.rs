//! The fields offered to users: the display menu, filter metadata and the
//! fields whose labels carry a country-name prefix.

use geohint_domain::{FieldMeta, FieldPath, FieldType};

/// Display menu in order: `(label, path)`.
pub const DISPLAY_FIELDS: [(&str, &str); 11] = [
    ("Top-level Domain", "tld"),
    ("GeoGuessr Tips", "#geoguessr_tips"),
    ("Number Plate (Visual; Front, Rear)", "#number_plate_visual"),
    ("Language", "language"),
    ("Street Terms", "#dynamic_street_terms"),
    ("Crosswalk Stripes", "crosswalk_stripes"),
    ("Crosswalk Features", "crosswalk_features"),
    ("Sign Back", "sign_back"),
    ("Camera", "camera"),
    ("GDP per capita", "gdp_per_capita"),
    ("Flag Description", "flag.description"),
];

/// Filter targets with their type and help text.
pub static FILTER_FIELDS: [(&str, FieldMeta); 10] = [
    ("language", FieldMeta::new(FieldType::List, "Languages spoken")),
    ("#dynamic_street_terms", FieldMeta::new(FieldType::String, "Street terms")),
    ("tld", FieldMeta::new(FieldType::String, "Top-level domain")),
    ("gdp_per_capita", FieldMeta::new(FieldType::Number, "GDP per capita (USD)")),
    ("number_plate", FieldMeta::new(FieldType::String, "Number plate description")),
    ("flag.description", FieldMeta::new(FieldType::String, "Flag description")),
    ("crosswalk_stripes", FieldMeta::new(FieldType::Number, "Number of crosswalk stripes")),
    ("crosswalk_features", FieldMeta::new(FieldType::String, "Crosswalk features description")),
    ("sign_back", FieldMeta::new(FieldType::String, "Sign back description")),
    ("camera", FieldMeta::new(FieldType::String, "Camera description")),
];

const PREPEND_COUNTRY_NAME: [&str; 11] = [
    "flag.description",
    "language",
    "#dynamic_street_terms",
    "tld",
    "gdp_per_capita",
    "number_plate",
    "crosswalk_stripes",
    "crosswalk_features",
    "sign_back",
    "frame_color_back",
    "camera",
];

/// Field used when no filterable field is selected.
pub const FALLBACK_FILTER_FIELD: &str = "language";

#[must_use]
pub fn filter_meta(path: &FieldPath) -> Option<&'static FieldMeta> {
    let raw = path.to_string();
    FILTER_FIELDS.iter().find(|(p, _)| *p == raw).map(|(_, meta)| meta)
}

#[must_use]
pub fn field_type(path: &FieldPath) -> Option<FieldType> {
    filter_meta(path).map(|meta| meta.field_type)
}

/// `true` for fields declared numeric; these get gradient backgrounds.
#[must_use]
pub fn is_numeric(path: &FieldPath) -> bool {
    filter_meta(path).is_some_and(FieldMeta::is_numeric)
}

/// Filter target paths, sorted.
#[must_use]
pub fn filter_field_choices() -> Vec<&'static str> {
    let mut choices: Vec<&str> = FILTER_FIELDS.iter().map(|(p, _)| *p).collect();
    choices.sort_unstable();
    choices
}

/// Whether labels for `path` are meant to start with the country name.
#[must_use]
pub fn prepends_country_name(path: &FieldPath) -> bool {
    let raw = path.to_string();
    PREPEND_COUNTRY_NAME.contains(&raw.as_str())
}

/// Field preselected for a new filter: the displayed field when it has
/// filter metadata, else [`FALLBACK_FILTER_FIELD`].
#[must_use]
pub fn default_filter_field(selected: &FieldPath) -> FieldPath {
    if filter_meta(selected).is_some() {
        selected.clone()
    } else {
        FieldPath::parse(FALLBACK_FILTER_FIELD)
    }
}
