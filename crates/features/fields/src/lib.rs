//! # Fields
//!
//! Everything the map asks about a field path: the value it resolves to for
//! a country, whether it is computed or rendered as a picture, whether it
//! can be filtered on and whether a record passes a filter, plus the label
//! markup built around the value.
//!
//! ```rust
//! use geohint_domain::{CountryRecord, FieldPath, MatchMode};
//! use geohint_fields::FieldRegistry;
//!
//! let registry = FieldRegistry::default();
//! let record = CountryRecord::new().with("language", vec!["Spanish", "English"]);
//! let language = FieldPath::parse("language");
//!
//! assert!(registry.matches(&language, &record, &MatchMode::Contains, "span"));
//! assert!(registry.is_filterable(&language));
//! assert!(!registry.is_filterable(&FieldPath::parse("#geoguessr_tips")));
//! ```

pub mod catalog;
mod builtin;
mod detail;
mod display;
mod error;
mod filter;
mod languages;
mod registry;
mod render;
mod resolve;

pub use crate::builtin::{AVAILABLE, NumberPlateField, StreetTermsField, TIPS_KEY, TipsField};
pub use crate::detail::{DetailSection, friendly_name};
pub use crate::display::{NO_CONFIG, effective_style, is_unavailable_placeholder};
pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::languages::{CharLanguageTable, record_uses_any};
pub use crate::registry::{ComputedField, FieldKind, FieldRegistry};
pub use crate::render::{LabelStyle, Renderer, flag_image_url};
pub use crate::resolve::{walk, walk_value};
