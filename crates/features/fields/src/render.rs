use geohint_domain::config::RenderConfig;
use geohint_domain::{CountryRecord, DisplayOptions};
use geohint_kernel::markup::escape;
use geohint_plates::PlateRenderer;
use std::fmt::Write as _;

/// Decorations and background for one country label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStyle {
    pub options: DisplayOptions,
    /// Any CSS colour; numeric fields pass their gradient colour here.
    pub background: String,
}

impl LabelStyle {
    #[must_use]
    pub fn new(options: DisplayOptions, background: impl Into<String>) -> Self {
        Self { options, background: background.into() }
    }
}

/// Builds label markup with the configured sizes and limits.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    plates: PlateRenderer,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Renderer {
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self { config: config.clone(), plates: PlateRenderer::from(config) }
    }

    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub const fn plates(&self) -> &PlateRenderer {
        &self.plates
    }

    /// Flag icon (when requested and known) above a bordered text box holding
    /// `content`, prefixed with `"<country>: "` when requested.
    ///
    /// Empty content draws no box when a flag is shown.
    #[must_use]
    pub fn text_label(&self, country: &str, record: &CountryRecord, content: &str, style: &LabelStyle) -> String {
        let text = if content.is_empty() {
            String::new()
        } else if style.options.show_country_name() {
            format!("{}: {}", escape(country), escape(content))
        } else {
            escape(content).into_owned()
        };
        let background = escape(&style.background);

        let flag = style.options.show_flag().then(|| flag_image_url(record)).flatten();
        let mut html = String::from(r#"<div style="text-align: center; font-size: 10px;">"#);

        if let Some(url) = flag {
            let _ = write!(
                html,
                r#"<img src="{}" style="width: 40px; height: auto; display: block; margin: 0 auto;" />"#,
                escape(url),
            );
            if !text.is_empty() {
                let _ = write!(
                    html,
                    r#"<div style="display: inline-block; background: {background}; padding: 1px 4px; border-radius: 4px; max-width: 200px; word-wrap: break-word; border: 1px solid #666; color: #000;">{text}</div>"#,
                );
            }
        } else {
            let _ = write!(
                html,
                r#"<div style="display: inline-block; background: {background}; padding: 2px 6px; border-radius: 4px; max-width: 200px; word-wrap: break-word; line-height: 1.2; border: 1px solid #666; color: #000;">{text}</div>"#,
            );
        }

        html.push_str("</div>");
        html
    }
}

/// The record's `flag.image_url`, when present and non-empty.
#[must_use]
pub fn flag_image_url(record: &CountryRecord) -> Option<&str> {
    record
        .get("flag")
        .and_then(|flag| flag.get("image_url"))
        .and_then(|url| url.as_text())
        .filter(|url| !url.is_empty())
}
