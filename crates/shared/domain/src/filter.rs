use crate::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a filter compares its text against a resolved value.
///
/// Parsing never fails; anything other than `contains`/`equals` is kept as
/// [`MatchMode::Unsupported`] and never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchMode {
    #[default]
    Contains,
    Equals,
    Unsupported(String),
}

impl MatchMode {
    /// The modes offered to users, in menu order.
    pub const SUPPORTED: [Self; 2] = [Self::Contains, Self::Equals];

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "contains" => Self::Contains,
            "equals" => Self::Equals,
            other => Self::Unsupported(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Contains => "contains",
            Self::Equals => "equals",
            Self::Unsupported(raw) => raw,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MatchMode {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for MatchMode {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<MatchMode> for String {
    fn from(mode: MatchMode) -> Self {
        mode.as_str().to_owned()
    }
}

/// One active filter: `(field path, match mode, comparison text)`.
///
/// Owned by the presentation layer; the rules engine only evaluates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub field: FieldPath,
    #[serde(rename = "match", default)]
    pub mode: MatchMode,
    #[serde(default)]
    pub value: String,
}

impl FilterSpec {
    #[must_use]
    pub fn new(
        field: impl Into<FieldPath>,
        mode: impl Into<MatchMode>,
        value: impl Into<String>,
    ) -> Self {
        Self { field: field.into(), mode: mode.into(), value: value.into() }
    }
}
