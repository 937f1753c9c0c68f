//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it carries the layered config loader and
//! the markup helpers shared by the renderers.
//!
//! ## Config loading
//! ```rust,ignore
//! use geohint_kernel::config::load_config;
//! use geohint_kernel::domain::config::GeohintConfig;
//!
//! let cfg: GeohintConfig = load_config(Some("geohint.toml")).unwrap_or_default();
//! ```
pub mod config;
pub mod markup;

pub use geohint_domain as domain;
