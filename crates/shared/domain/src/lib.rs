//! # Domain Models
//!
//! Pure data types shared by every GeoHint crate: the schema-less country
//! [`Value`](value::Value), the [`FieldPath`](path::FieldPath) tagged variant,
//! filter specifications and configuration structs.
//! Keep it lean: no I/O and no rules, just data and simple helpers.

pub mod config;
pub mod display;
pub mod field;
pub mod filter;
pub mod path;
pub mod record;
pub mod value;

pub use crate::display::DisplayOptions;
pub use crate::field::{FieldMeta, FieldType};
pub use crate::filter::{FilterSpec, MatchMode};
pub use crate::path::{Directive, FieldPath};
pub use crate::record::{CountryRecord, Dataset};
pub use crate::value::Value;
