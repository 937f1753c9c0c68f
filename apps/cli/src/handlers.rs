//! Command handlers. Each returns the text to print on stdout.

use crate::args::Side;
use anyhow::{Context, Result, bail};
use geohint::domain::config::GeohintConfig;
use geohint::domain::{CountryRecord, Dataset, FieldPath, FilterSpec, Value};
use geohint::features::fields::{CharLanguageTable, catalog};
use geohint::features::plates::{PLATE_CONFIG_KEY, PlateRenderer, PlateSide, svg_data_url};
use geohint::features::stats::parse_numeric_text;
use geohint::features::streets::StreetTermTable;
use geohint::{Engine, Selection};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn list_fields() -> String {
    let mut out = String::from("Display fields (* labels start with the country name):\n");
    for (label, path) in catalog::DISPLAY_FIELDS {
        let marker = if catalog::prepends_country_name(&FieldPath::parse(path)) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {path:<24} {label}");
    }
    out.push_str("\nFilter fields:\n");
    for path in catalog::filter_field_choices() {
        if let Some(meta) = catalog::filter_meta(&FieldPath::parse(path)) {
            let _ = writeln!(out, "  {path:<24} {:<7} {}", meta.field_type.as_ref(), meta.description);
        }
    }
    out
}

/// The summary line, followed by every known term per language when `full`.
pub fn street_summary(languages: &[String], full: bool) -> String {
    let table = StreetTermTable::builtin();
    let mut out = table.summary(languages.iter().map(String::as_str));
    if full {
        for language in languages {
            if let Some(terms) = table.get(language) {
                let _ = write!(out, "\n{language}\t{}\t{}", terms.street.join(", "), terms.abbreviations.join(", "));
            }
        }
    }
    out
}

/// One `text<TAB>number` line per input; `-` when nothing parses.
pub fn parse_numbers(texts: &[String]) -> String {
    texts
        .iter()
        .map(|text| {
            let parsed = parse_numeric_text(text).map_or_else(|| "-".to_owned(), |n| n.to_string());
            format!("{text}\t{parsed}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_plate(
    config: &GeohintConfig,
    style: &str,
    country: &str,
    side: Option<Side>,
    data_url: bool,
) -> Result<String> {
    let plate_config: Value = serde_json::from_str(style).context("Plate style is not valid JSON")?;
    if plate_config.as_nested().is_none() {
        bail!("Plate style must be a JSON object with `front` and/or `rear`");
    }
    let record = CountryRecord::new().with(PLATE_CONFIG_KEY, plate_config);
    let renderer = PlateRenderer::from(&config.render);

    let svg = match side {
        Some(Side::Front) => renderer.side_svg(&record, PlateSide::Front, country),
        Some(Side::Rear) => renderer.side_svg(&record, PlateSide::Rear, country),
        None => renderer.combined_svg(&record, country),
    };
    let svg = svg.context("No plate configured for the requested side")?;

    Ok(if data_url { svg_data_url(&svg) } else { svg })
}

#[derive(Debug)]
pub struct EvaluateRequest<'a> {
    pub dataset: &'a Path,
    pub field: &'a str,
    pub filters: Vec<FilterSpec>,
    pub chars: &'a str,
    pub languages: Option<&'a Path>,
    pub json: bool,
}

/// Runs one evaluation pass and prints `country<TAB>content<TAB>background`
/// per shown country, or the whole overlay as JSON.
pub fn evaluate(config: &GeohintConfig, request: EvaluateRequest<'_>) -> Result<String> {
    let dataset: Dataset = read_json(request.dataset).context("Failed to load dataset")?;

    let mut engine = Engine::new(config);
    if let Some(path) = request.languages {
        let table: CharLanguageTable = read_json(path).context("Failed to load character table")?;
        debug!(characters = table.characters().count(), "Character table loaded");
        engine = engine.with_languages(table);
    }

    let selection = Selection::builder()
        .field(request.field)
        .filters(request.filters)
        .characters(request.chars.chars().filter(|c| !c.is_whitespace()).collect())
        .build();

    let overlay = engine.evaluate(&dataset, &selection);

    if request.json {
        return serde_json::to_string_pretty(&overlay).context("Failed to serialize overlay");
    }

    let mut out = String::new();
    for label in &overlay.labels {
        let _ = writeln!(out, "{}\t{}\t{}", label.country, label.content, label.background);
    }
    let _ = write!(out, "{} of {} countries shown", overlay.shown, dataset.len());
    Ok(out)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_line_up_with_inputs() {
        let out = parse_numbers(&["3-5".to_owned(), "none".to_owned(), "約12".to_owned()]);
        assert_eq!(out, "3-5\t4\nnone\t-\n約12\t12");
    }

    #[test]
    fn unknown_languages_give_the_sentinel() {
        assert_eq!(street_summary(&["Klingon".to_owned()], true), "No street terms available");
    }

    #[test]
    fn full_street_rows_follow_the_summary() {
        let out = street_summary(&["Estonian".to_owned()], true);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], "Estonian\tTänav, Tee, Väljak, Puiestee\ttn, tee, välj., pst");
    }

    #[test]
    fn plate_style_must_be_an_object() {
        let config = GeohintConfig::default();
        assert!(render_plate(&config, "[1, 2]", "", None, false).is_err());
        assert!(render_plate(&config, "{not json", "", None, false).is_err());

        let svg = render_plate(&config, r#"{"front": {"bg_color": "yellow"}}"#, "NL", Some(Side::Front), false)
            .expect("front plate renders");
        assert!(svg.starts_with("<svg"));
        assert!(render_plate(&config, r#"{"front": {"bg_color": "yellow"}}"#, "NL", Some(Side::Rear), false).is_err());
    }

    #[test]
    fn field_listing_mentions_every_display_path() {
        let out = list_fields();
        for (_, path) in catalog::DISPLAY_FIELDS {
            assert!(out.contains(path), "{path} missing");
        }
        assert!(out.contains("number"));
    }

    #[test]
    fn field_listing_marks_country_name_prefixes() {
        let out = list_fields();
        let row = |path: &str| {
            out.lines()
                .find(|line| line.get(2..).is_some_and(|rest| rest.split_whitespace().next() == Some(path)))
                .unwrap_or_else(|| panic!("{path} missing"))
                .to_owned()
        };
        assert!(row("tld").starts_with("* "));
        assert!(row("flag.description").starts_with("* "));
        assert!(row("#geoguessr_tips").starts_with("  "));
        assert!(row("#number_plate_visual").starts_with("  "));
    }
}
