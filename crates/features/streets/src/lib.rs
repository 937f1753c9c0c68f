//! # Street Terms
//!
//! Static street vocabulary per language (full terms and their abbreviations,
//! most common first) and the one-line summary shown for the
//! `#dynamic_street_terms` field.
//!
//! ```rust
//! use geohint_streets::{StreetTermTable, NO_STREET_TERMS};
//!
//! let table = StreetTermTable::builtin();
//! assert!(table.summary(["Estonian"]).starts_with("Estonian: Tänav, Tee, Väljak"));
//! assert_eq!(table.summary(["Klingon"]), NO_STREET_TERMS);
//! ```

mod builtin;
mod error;
mod summary;
mod table;

pub use crate::error::{TableError, TableErrorExt};
pub use crate::summary::{NO_STREET_TERMS, SUMMARY_DEPTH, languages_of};
pub use crate::table::{StreetTermTable, StreetTerms};
