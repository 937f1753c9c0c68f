use crate::style::{PlateSide, PlateStyle, has_number_plate_config};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use geohint_domain::CountryRecord;
use geohint_domain::config::RenderConfig;
use geohint_kernel::markup::escape;
use std::fmt::Write as _;
use tracing::trace;

const PLACEHOLDER_TEXT: &str = "ABC 123";
const DEFAULT_BG: &str = "white";
const DEFAULT_TEXT: &str = "black";
const DEFAULT_BORDER: &str = "gray";
const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Plate font size for a text of the given length (in characters).
#[must_use]
pub const fn font_size(chars: usize) -> u32 {
    match chars {
        0..=6 => 64,
        7..=10 => 52,
        11..=15 => 40,
        _ => 32,
    }
}

/// Wraps an SVG document in a base64 `data:` URL.
#[must_use]
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Draws plates on a fixed-width canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateRenderer {
    width: u32,
    default_aspect_ratio: f64,
    gap: u32,
}

impl Default for PlateRenderer {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for PlateRenderer {
    fn from(config: &RenderConfig) -> Self {
        Self {
            width: config.plate_width,
            default_aspect_ratio: config.plate_aspect_ratio,
            gap: config.plate_gap,
        }
    }
}

impl PlateRenderer {
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height for a side; unconfigured sides use the default ratio.
    #[must_use]
    pub fn height(&self, style: Option<&PlateStyle>) -> u32 {
        let ratio = style.and_then(|s| s.aspect_ratio).unwrap_or(self.default_aspect_ratio);
        (f64::from(self.width) * ratio) as u32
    }

    /// A standalone SVG of one plate side, or `None` if the side is not configured.
    #[must_use]
    pub fn side_svg(&self, record: &CountryRecord, side: PlateSide, country: &str) -> Option<String> {
        let style = PlateStyle::for_side(record, side)?;
        let height = self.height(Some(&style));
        Some(format!(
            r#"<svg width="{w}" height="{height}" xmlns="{SVG_NS}">{body}</svg>"#,
            w = self.width,
            body = self.plate_body(&style, height, country),
        ))
    }

    /// Front and rear plates side by side, or `None` when the record has no
    /// plate configuration. A side without a style leaves its slot empty.
    #[must_use]
    pub fn combined_svg(&self, record: &CountryRecord, country: &str) -> Option<String> {
        if !has_number_plate_config(record) {
            return None;
        }

        let front = PlateStyle::for_side(record, PlateSide::Front);
        let rear = PlateStyle::for_side(record, PlateSide::Rear);
        let rear_x = self.width + self.gap;
        let total_width = rear_x + self.width;
        let height = self.height(front.as_ref()).max(self.height(rear.as_ref()));

        let mut svg = format!(r#"<svg width="{total_width}" height="{height}" xmlns="{SVG_NS}">"#);
        for (x, style) in [(0, front), (rear_x, rear)] {
            let body = style
                .map(|s| self.plate_body(&s, self.height(Some(&s)), country))
                .unwrap_or_default();
            let _ = write!(svg, r#"<g transform="translate({x},0)">{body}</g>"#);
        }
        svg.push_str("</svg>");

        trace!(country, bytes = svg.len(), "Combined plate rendered");
        Some(svg)
    }

    /// [`Self::combined_svg`] as a `data:` URL.
    #[must_use]
    pub fn combined_data_url(&self, record: &CountryRecord, country: &str) -> Option<String> {
        self.combined_svg(record, country).map(|svg| svg_data_url(&svg))
    }

    /// [`Self::side_svg`] as a `data:` URL.
    #[must_use]
    pub fn side_data_url(&self, record: &CountryRecord, side: PlateSide, country: &str) -> Option<String> {
        self.side_svg(record, side, country).map(|svg| svg_data_url(&svg))
    }

    fn plate_body(&self, style: &PlateStyle, height: u32, country: &str) -> String {
        let width = self.width;
        let inner_w = width.saturating_sub(4);
        let inner_h = height.saturating_sub(4);
        let band_width = width / 10;
        let band_height = height / 3;

        let bg = style.bg_color.as_deref().unwrap_or(DEFAULT_BG);
        let text_color = style.text_color.as_deref().unwrap_or(DEFAULT_TEXT);
        let border = style.border_color.as_deref().unwrap_or(DEFAULT_BORDER);

        let mut body = format!(
            r#"<rect x="2" y="2" width="{inner_w}" height="{inner_h}" fill="{}" stroke="{}" stroke-width="2" rx="6"/>"#,
            escape(bg),
            escape(border),
        );

        if let Some(color) = &style.top_band_color {
            let _ = write!(
                body,
                r#"<rect x="2" y="2" width="{inner_w}" height="{band_height}" fill="{}" />"#,
                escape(color),
            );
        }
        if let Some(color) = &style.left_band_color {
            let _ = write!(
                body,
                r#"<rect x="2" y="2" width="{band_width}" height="{inner_h}" fill="{}" />"#,
                escape(color),
            );
        }
        if let Some(color) = &style.right_band_color {
            let right_x = width.saturating_sub(band_width + 2);
            let _ = write!(
                body,
                r#"<rect x="{right_x}" y="2" width="{band_width}" height="{inner_h}" fill="{}" />"#,
                escape(color),
            );
        }

        let text = if country.is_empty() { PLACEHOLDER_TEXT } else { country };
        let _ = write!(
            body,
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{}" font-family="Arial, sans-serif" font-size="{}" font-weight="bold">{}</text>"#,
            width / 2,
            height / 2 + 5,
            escape(text_color),
            font_size(text.chars().count()),
            escape(text),
        );
        body
    }
}
