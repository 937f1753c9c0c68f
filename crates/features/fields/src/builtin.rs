use crate::registry::{ComputedField, FieldKind};
use crate::render::{LabelStyle, Renderer, flag_image_url};
use geohint_domain::{CountryRecord, Value};
use geohint_kernel::markup::{ellipsize, escape, truncate};
use geohint_plates::has_number_plate_config;
use geohint_streets::{StreetTermTable, languages_of};
use std::fmt::Write as _;

/// Value of the presence checks; the content itself is rendered separately.
pub const AVAILABLE: &str = "Available";

/// Record attribute holding `short`/`long` tip lists.
pub const TIPS_KEY: &str = "geoguessr_tips";

/// Street terms for every language the record lists.
#[derive(Debug, Clone, Copy)]
pub struct StreetTermsField {
    table: &'static StreetTermTable,
}

impl StreetTermsField {
    pub const NAME: &'static str = "#dynamic_street_terms";

    #[must_use]
    pub const fn new(table: &'static StreetTermTable) -> Self {
        Self { table }
    }
}

impl Default for StreetTermsField {
    fn default() -> Self {
        Self::new(StreetTermTable::builtin())
    }
}

impl ComputedField for StreetTermsField {
    fn compute(&self, record: &CountryRecord) -> Option<Value> {
        let languages = record.get("language").map(languages_of).unwrap_or_default();
        Some(Value::Text(self.table.summary(languages)))
    }
}

/// Front and rear plate images.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberPlateField;

impl NumberPlateField {
    pub const NAME: &'static str = "#number_plate_visual";
}

impl ComputedField for NumberPlateField {
    fn compute(&self, record: &CountryRecord) -> Option<Value> {
        has_number_plate_config(record).then(|| Value::from(AVAILABLE))
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Visual
    }

    fn render(&self, renderer: &Renderer, country: &str, record: &CountryRecord, style: &LabelStyle) -> Option<String> {
        let plate_url = renderer.plates().combined_data_url(record, country)?;
        let mut html = String::from(r#"<div style="text-align: center; font-size: 10px;">"#);

        if let Some(url) = style.options.show_flag().then(|| flag_image_url(record)).flatten() {
            let _ = write!(
                html,
                r#"<img src="{}" style="width: 30px; height: auto; display: block; margin: 0 auto 5px auto;" />"#,
                escape(url),
            );
        }
        if style.options.show_country_name() {
            let _ = write!(
                html,
                r#"<div style="font-size: 10px; margin-bottom: 5px; color: #000;">{}</div>"#,
                escape(country),
            );
        }
        let _ = write!(
            html,
            r#"<img src="{plate_url}" style="width: 120px; height: auto; display: block; margin: 0 auto;" /></div>"#,
        );
        Some(html)
    }
}

/// Short and long gameplay tips.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipsField;

impl TipsField {
    pub const NAME: &'static str = "#geoguessr_tips";
}

fn tip_list<'r>(record: &'r CountryRecord, which: &str) -> Option<&'r [Value]> {
    record
        .get(TIPS_KEY)
        .and_then(|tips| tips.get(which))
        .and_then(Value::as_list)
        .filter(|list| !list.is_empty())
}

impl ComputedField for TipsField {
    fn compute(&self, record: &CountryRecord) -> Option<Value> {
        let any = tip_list(record, "short").is_some() || tip_list(record, "long").is_some();
        any.then(|| Value::from(AVAILABLE))
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Visual
    }

    /// Compact card of the `short` tips only.
    fn render(&self, renderer: &Renderer, country: &str, record: &CountryRecord, style: &LabelStyle) -> Option<String> {
        let tips = tip_list(record, "short")?;
        let config = renderer.config();

        let mut body = String::new();
        for tip in tips {
            let text_of = |key: &str| tip.get(key).map(|v| v.text_form().into_owned()).unwrap_or_default();
            match tip.get("type").and_then(Value::as_text) {
                Some("text") => {
                    let content = text_of("content");
                    let _ = write!(
                        body,
                        r#"<div style="margin: 2px 0; font-size: 8px; line-height: 1.2; color: #333;">{}</div>"#,
                        escape(&ellipsize(&content, config.tip_text_limit)),
                    );
                },
                Some("image") => {
                    let path = text_of("path");
                    let src = if path.starts_with("data:") || path.starts_with("http") {
                        path
                    } else {
                        format!("{}{path}", config.tip_asset_prefix)
                    };
                    let _ = write!(
                        body,
                        r#"<div style="margin: 3px 0; text-align: center;"><img src="{}" style="width: 30%; max-width: 30px; height: auto; display: block; margin: 0 auto;" />"#,
                        escape(&src),
                    );
                    let caption = text_of("caption");
                    if !caption.is_empty() {
                        let cut = truncate(&caption, config.tip_caption_limit);
                        let more = if cut.len() < caption.len() { "..." } else { "" };
                        let _ = write!(
                            body,
                            r#"<div style="font-size: 7px; text-align: center; color: #666; margin-top: 1px; line-height: 1.1;">{}{more}</div>"#,
                            escape(cut),
                        );
                    }
                    body.push_str("</div>");
                },
                _ => {},
            }
        }

        let mut html = format!(
            r#"<div style="text-align: center; font-size: 10px; background: {}; padding: 4px; border-radius: 4px; border: 1px solid #666; max-width: 120px;">"#,
            escape(&style.background),
        );
        if let Some(url) = style.options.show_flag().then(|| flag_image_url(record)).flatten() {
            let _ = write!(
                html,
                r#"<img src="{}" style="width: 25px; height: auto; display: block; margin: 0 auto 3px auto;" />"#,
                escape(url),
            );
        }
        if style.options.show_country_name() {
            let _ = write!(
                html,
                r#"<div style="font-size: 9px; margin-bottom: 3px; color: #000; font-weight: bold;">{}</div>"#,
                escape(country),
            );
        }
        let _ = write!(html, r#"<div style="text-align: left; max-width: 110px;">{body}</div></div>"#);
        Some(html)
    }
}
