//! Facade crate for the GeoHint rules engine.
//! Re-exports the domain, kernel and feature slices and composes them into a
//! single evaluation pass. Keep this crate thin: rules live in the slices.
//!
//! ## Usage
//! ```rust
//! use geohint::{Engine, Selection};
//! use geohint::domain::{CountryRecord, Dataset, FilterSpec};
//!
//! let dataset: Dataset = [
//!     ("Chile", CountryRecord::new().with("language", vec!["Spanish"]).with("tld", ".cl")),
//!     ("Estonia", CountryRecord::new().with("language", vec!["Estonian"]).with("tld", ".ee")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let selection = Selection::builder()
//!     .field("tld")
//!     .filters(vec![FilterSpec::new("language", "contains", "span")])
//!     .build();
//!
//! let overlay = Engine::default().evaluate(&dataset, &selection);
//! assert_eq!(overlay.shown, 1);
//! assert_eq!(overlay.labels[0].content, ".cl");
//! ```

mod engine;

pub use crate::engine::{CountryLabel, Engine, Overlay, Selection};
pub use geohint_domain as domain;
pub use geohint_kernel as kernel;

/// Feature slices, for callers that need more than the evaluation pass.
pub mod features {
    pub use geohint_fields as fields;
    pub use geohint_plates as plates;
    pub use geohint_stats as stats;
    pub use geohint_streets as streets;
}
