//! # Numeric Fields
//!
//! Turns messy numeric attributes (`"3-5"`, `"approximately 7"`, `"約12"`)
//! into comparable numbers, summarises a field's distribution across the
//! dataset and maps a value's percentile rank onto a red → yellow → green
//! background.
//!
//! ```rust
//! use geohint_domain::Value;
//! use geohint_stats::{Distribution, Gradient, parse_numeric};
//!
//! let samples = ["3-5", "2", "around 8", "no data"].map(Value::from);
//! let dist = Distribution::from_values(samples.iter().filter_map(parse_numeric)).unwrap();
//! assert_eq!(dist.count(), 3);
//!
//! let color = Gradient::default().color(&Value::from(2_i64), Some(&dist));
//! assert_eq!(color.to_string(), "rgba(255, 0, 0, 0.4)");
//! ```

mod color;
mod distribution;
mod numeric;

pub use crate::color::{Color, Gradient, LegendEntry};
pub use crate::distribution::Distribution;
pub use crate::numeric::{parse_numeric, parse_numeric_text};
