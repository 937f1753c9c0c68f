use crate::registry::FieldRegistry;
use crate::render::{LabelStyle, Renderer};
use geohint_domain::{CountryRecord, Directive, DisplayOptions, FieldPath, Value};

/// Fallback text when a visual field cannot be rendered.
pub const NO_CONFIG: &str = "No config available";

impl FieldRegistry {
    /// Text shown in a country's label for `path`.
    ///
    /// Lists join with `", "`, missing values give an empty string and
    /// directives produce the country name (or nothing for `#no_text`).
    #[must_use]
    pub fn display_content(&self, path: &FieldPath, country: &str, record: &CountryRecord) -> String {
        match path.directive() {
            Some(Directive::CountryName | Directive::NoIcon) => country.to_owned(),
            Some(Directive::NoText) => String::new(),
            None => self
                .resolve(path, record)
                .map(|value| match value.as_ref() {
                    Value::Text(text) => text.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_default(),
        }
    }

    /// Whether a label with `content` is worth showing.
    ///
    /// Visual fields count when their presence value exists. Text must be
    /// non-blank and not a `"No … available"` placeholder. A flag-only
    /// directive is always shown.
    #[must_use]
    pub fn has_valid_content(&self, path: &FieldPath, content: &str, record: &CountryRecord) -> bool {
        if self.is_visual_field(path) {
            return self.resolve(path, record).is_some();
        }
        if path.directive() == Some(Directive::NoText) {
            return true;
        }
        !content.trim().is_empty() && !is_unavailable_placeholder(content)
    }

    /// Label markup for `path`: the rendered fragment for visual fields
    /// (falling back to a [`NO_CONFIG`] text label), else a text label.
    #[must_use]
    pub fn label_html(
        &self,
        renderer: &Renderer,
        path: &FieldPath,
        country: &str,
        record: &CountryRecord,
        style: &LabelStyle,
    ) -> String {
        let style = effective_style(path, style);
        if self.is_visual_field(path) {
            return self
                .render_visual_fragment(renderer, path, country, record, &style)
                .unwrap_or_else(|| renderer.text_label(country, record, NO_CONFIG, &style));
        }
        let content = self.display_content(path, country, record);
        renderer.text_label(country, record, &content, &style)
    }
}

/// `"No street terms available"` and the like.
#[must_use]
pub fn is_unavailable_placeholder(content: &str) -> bool {
    content.contains("No ") && content.contains("available")
}

/// Applies directive overrides: a name label never repeats the name as a
/// prefix, and `#no_icon` never shows a flag.
#[must_use]
pub fn effective_style(path: &FieldPath, style: &LabelStyle) -> LabelStyle {
    let options = match path.directive() {
        Some(Directive::CountryName | Directive::NoText) => {
            style.options - DisplayOptions::SHOW_COUNTRY_NAME
        },
        Some(Directive::NoIcon) => DisplayOptions::empty(),
        None => style.options,
    };
    LabelStyle { options, background: style.background.clone() }
}
