use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Sentinel that opens every reserved (non-attribute) field path.
pub const RESERVED_PREFIX: char = '#';

/// Reserved paths carrying this prefix are multi-step computed fields.
pub const DYNAMIC_PREFIX: &str = "#dynamic_";

/// Presentation-only instructions that never read a record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, AsRefStr, EnumIter)]
pub enum Directive {
    /// Label with the country name instead of a field.
    #[strum(serialize = "#country_name")]
    CountryName,
    /// Flag only, no text.
    #[strum(serialize = "#no_text")]
    NoText,
    /// Country name only, never a flag icon.
    #[strum(serialize = "#no_icon")]
    NoIcon,
}

/// What the user picked to show or filter on.
///
/// Parsed once from the raw string at the boundary; lookups then match on the
/// variant instead of re-inspecting string prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldPath {
    /// A top-level attribute, matched verbatim.
    Key(String),
    /// Keys joined by `.`, walked left to right into nested records.
    Nested(Vec<String>),
    /// A reserved marker naming a computed field (e.g. `#dynamic_street_terms`).
    Computed(String),
    Directive(Directive),
}

impl FieldPath {
    /// Classifies a raw field path. Never fails: unknown markers become
    /// [`FieldPath::Computed`] and simply resolve to nothing.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with(RESERVED_PREFIX) {
            return raw
                .parse::<Directive>()
                .map_or_else(|_| Self::Computed(raw.to_owned()), Self::Directive);
        }

        if raw.contains('.') {
            Self::Nested(raw.split('.').map(str::to_owned).collect())
        } else {
            Self::Key(raw.to_owned())
        }
    }

    /// Attribute keys to walk, or `None` for reserved paths.
    #[must_use]
    pub fn segments(&self) -> Option<&[String]> {
        match self {
            Self::Key(key) => Some(std::slice::from_ref(key)),
            Self::Nested(keys) => Some(keys),
            Self::Computed(_) | Self::Directive(_) => None,
        }
    }

    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// `true` for computed markers carrying [`DYNAMIC_PREFIX`].
    #[must_use]
    pub fn has_dynamic_prefix(&self) -> bool {
        matches!(self, Self::Computed(name) if name.starts_with(DYNAMIC_PREFIX))
    }

    #[must_use]
    pub const fn directive(&self) -> Option<Directive> {
        match self {
            Self::Directive(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Nested(keys) => f.write_str(&keys.join(".")),
            Self::Computed(name) => f.write_str(name),
            Self::Directive(d) => f.write_str(d.as_ref()),
        }
    }
}

impl FromStr for FieldPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

impl From<Directive> for FieldPath {
    fn from(d: Directive) -> Self {
        Self::Directive(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_the_four_shapes() {
        assert_eq!(FieldPath::parse("tld"), FieldPath::Key("tld".to_owned()));
        assert_eq!(
            FieldPath::parse("flag.description"),
            FieldPath::Nested(vec!["flag".to_owned(), "description".to_owned()])
        );
        assert_eq!(
            FieldPath::parse("#dynamic_street_terms"),
            FieldPath::Computed("#dynamic_street_terms".to_owned())
        );
        assert_eq!(FieldPath::parse("#no_icon"), FieldPath::Directive(Directive::NoIcon));
    }

    #[test]
    fn display_restores_the_raw_form() {
        for raw in ["language", "flag.image_url", "#geoguessr_tips", "#country_name", "a..b"] {
            assert_eq!(FieldPath::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn dynamic_prefix_only_applies_to_computed_markers() {
        assert!(FieldPath::parse("#dynamic_street_terms").has_dynamic_prefix());
        assert!(!FieldPath::parse("#number_plate_visual").has_dynamic_prefix());
        assert!(!FieldPath::parse("dynamic_street_terms").has_dynamic_prefix());
    }
}
