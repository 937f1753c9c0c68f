use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum_macros::{AsRefStr, EnumString};

/// Declared shape of a field, used to pick filter widgets and numeric colouring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    List,
}

/// Display metadata for a filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub field_type: FieldType,
    pub description: Cow<'static, str>,
}

impl FieldMeta {
    #[must_use]
    pub const fn new(field_type: FieldType, description: &'static str) -> Self {
        Self { field_type, description: Cow::Borrowed(description) }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.field_type, FieldType::Number)
    }
}
