//! # Number Plates
//!
//! Builds SVG images of a country's front and rear number plates from the
//! record's `number_plate_config` attribute, side by side when combined, and
//! encodes them as `data:` URLs for embedding in markup.

mod render;
mod style;

pub use crate::render::{PlateRenderer, font_size, svg_data_url};
pub use crate::style::{PLATE_CONFIG_KEY, PlateSide, PlateStyle, has_number_plate_config};
