use geohint_domain::config::GeohintConfig;
use geohint_domain::{CountryRecord, Dataset, DisplayOptions, FieldPath, FilterSpec, Value};
use geohint_fields::{CharLanguageTable, FieldRegistry, LabelStyle, Renderer, catalog, record_uses_any};
use geohint_stats::{Color, Distribution, Gradient, LegendEntry, parse_numeric};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, trace};
use typed_builder::TypedBuilder;

/// What the user picked for one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct Selection {
    /// Field shown in every label.
    #[builder(setter(into))]
    pub field: FieldPath,
    #[builder(default)]
    pub options: DisplayOptions,
    /// Active filters, all of which must match.
    #[builder(default)]
    pub filters: Vec<FilterSpec>,
    /// Selected characters; countries must speak a language using all of them.
    #[builder(default)]
    pub characters: Vec<char>,
}

/// One label to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryLabel {
    pub country: String,
    /// Plain text form of the shown value.
    pub content: String,
    pub background: Color,
    pub html: String,
    /// Popup body with everything known about the country.
    pub detail: String,
    /// `(latitude, longitude)` when the record has coordinates.
    pub position: Option<(f64, f64)>,
}

/// Result of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub labels: Vec<CountryLabel>,
    /// Present when the field is numeric and at least one value parsed.
    pub distribution: Option<Distribution>,
    pub legend: Vec<LegendEntry>,
    pub shown: usize,
}

/// Rules engine composed from the feature slices.
#[derive(Debug)]
pub struct Engine {
    registry: FieldRegistry,
    renderer: Renderer,
    gradient: Gradient,
    languages: CharLanguageTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&GeohintConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: &GeohintConfig) -> Self {
        Self {
            registry: FieldRegistry::builtin(&config.fields),
            renderer: Renderer::new(&config.render),
            gradient: Gradient::from(&config.render),
            languages: CharLanguageTable::default(),
        }
    }

    /// Uses `languages` for character selections.
    #[must_use]
    pub fn with_languages(mut self, languages: CharLanguageTable) -> Self {
        self.languages = languages;
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// For registering additional computed fields.
    pub const fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[must_use]
    pub const fn languages(&self) -> &CharLanguageTable {
        &self.languages
    }

    /// Distribution of `path` over every record whose value parses as a number.
    #[must_use]
    pub fn compute_distribution(&self, dataset: &Dataset, path: &FieldPath) -> Option<Distribution> {
        let values = dataset
            .records()
            .filter_map(|record| self.registry.resolve(path, record))
            .filter_map(|value| parse_numeric(&value));
        Distribution::from_values(values)
    }

    /// Background for `value` against `distribution`.
    #[must_use]
    pub fn color_for(&self, value: &Value, distribution: Option<&Distribution>) -> Color {
        self.gradient.color(value, distribution)
    }

    /// Legend swatches, empty when there is no distribution to explain.
    #[must_use]
    pub fn legend(&self, distribution: Option<&Distribution>) -> Vec<LegendEntry> {
        distribution.map(|_| self.gradient.legend()).unwrap_or_default()
    }

    /// One pass over the dataset: filter, resolve, validate, colour and
    /// render a label per shown country.
    #[must_use]
    pub fn evaluate(&self, dataset: &Dataset, selection: &Selection) -> Overlay {
        let field = &selection.field;
        let distribution = catalog::is_numeric(field)
            .then(|| self.compute_distribution(dataset, field))
            .flatten();
        let languages = self.languages.languages_using_all(&selection.characters);
        if !selection.characters.is_empty() {
            debug!(characters = selection.characters.len(), languages = languages.len(), "Character selection applied");
        }

        let labels: Vec<CountryLabel> = dataset
            .iter()
            .filter(|(country, record)| self.admits(country, record, selection, &languages))
            .filter_map(|(country, record)| self.label(country, record, selection, distribution.as_ref()))
            .collect();

        let shown = labels.len();
        info!(field = %field, shown, total = dataset.len(), "Evaluation pass finished");

        Overlay { legend: self.legend(distribution.as_ref()), labels, distribution, shown }
    }

    fn admits(&self, country: &str, record: &CountryRecord, selection: &Selection, languages: &BTreeSet<&str>) -> bool {
        if !selection.characters.is_empty() && !record_uses_any(record, languages) {
            trace!(country, "Excluded by character selection");
            return false;
        }
        self.registry.passes_all(&selection.filters, record)
    }

    fn label(
        &self,
        country: &str,
        record: &CountryRecord,
        selection: &Selection,
        distribution: Option<&Distribution>,
    ) -> Option<CountryLabel> {
        let field = &selection.field;
        let content = self.registry.display_content(field, country, record);
        if !self.registry.has_valid_content(field, &content, record) {
            trace!(country, "No content to show");
            return None;
        }

        let background = self
            .registry
            .resolve(field, record)
            .map_or_else(|| self.gradient.neutral(), |value| self.color_for(&value, distribution));
        let style = LabelStyle::new(selection.options, background.to_string());

        Some(CountryLabel {
            country: country.to_owned(),
            html: self.registry.label_html(&self.renderer, field, country, record, &style),
            detail: self.registry.detail_html(record),
            position: position(record),
            content,
            background,
        })
    }
}

fn position(record: &CountryRecord) -> Option<(f64, f64)> {
    match record.get("latlng")?.as_list()? {
        [lat, lng] => Some((lat.as_number()?, lng.as_number()?)),
        _ => None,
    }
}
