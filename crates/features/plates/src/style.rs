use geohint_domain::{CountryRecord, Value};
use strum_macros::{AsRefStr, EnumIter};

/// Record attribute holding the per-side plate styles.
pub const PLATE_CONFIG_KEY: &str = "number_plate_config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PlateSide {
    Front,
    Rear,
}

/// Visual configuration of one plate side. Unset colours use the renderer's
/// defaults; unset bands are not drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlateStyle {
    pub aspect_ratio: Option<f64>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
    pub top_band_color: Option<String>,
    pub left_band_color: Option<String>,
    pub right_band_color: Option<String>,
}

impl PlateStyle {
    /// Reads a side's style from its nested config. Empty or non-record
    /// values mean the side is not configured.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_nested().filter(|map| !map.is_empty())?;
        let color = |key: &str| {
            map.get(key).filter(|v| v.is_truthy()).map(|v| v.text_form().into_owned())
        };

        Some(Self {
            aspect_ratio: map
                .get("aspect_ratio")
                .and_then(Value::as_number)
                .filter(|ratio| ratio.is_finite() && *ratio > 0.0),
            bg_color: color("bg_color"),
            text_color: color("text_color"),
            border_color: color("border_color"),
            top_band_color: color("top_band_color"),
            left_band_color: color("left_band_color"),
            right_band_color: color("right_band_color"),
        })
    }

    /// The configured style for `side` of `record`, if any.
    #[must_use]
    pub fn for_side(record: &CountryRecord, side: PlateSide) -> Option<Self> {
        plate_config(record)
            .and_then(|config| config.get(side.as_ref()))
            .and_then(Self::from_value)
    }
}

fn plate_config(record: &CountryRecord) -> Option<&Value> {
    record.get(PLATE_CONFIG_KEY).filter(|config| config.is_truthy())
}

/// `true` when the record carries a non-empty `number_plate_config`.
#[must_use]
pub fn has_number_plate_config(record: &CountryRecord) -> bool {
    plate_config(record).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn nested(pairs: &[(&str, Value)]) -> Value {
        Value::Nested(pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect())
    }

    #[test]
    fn side_names_are_lowercase() {
        assert_eq!(PlateSide::Front.as_ref(), "front");
        assert_eq!(PlateSide::Rear.as_ref(), "rear");
    }

    #[test]
    fn empty_configs_do_not_count() {
        let empty = CountryRecord::new().with(PLATE_CONFIG_KEY, Value::Nested(BTreeMap::new()));
        assert!(!has_number_plate_config(&empty));
        assert!(!has_number_plate_config(&CountryRecord::new()));

        let front = nested(&[("bg_color", Value::from("yellow"))]);
        let record = CountryRecord::new().with(PLATE_CONFIG_KEY, nested(&[("front", front)]));
        assert!(has_number_plate_config(&record));
        assert!(PlateStyle::for_side(&record, PlateSide::Front).is_some());
        assert!(PlateStyle::for_side(&record, PlateSide::Rear).is_none());
    }

    #[test]
    fn blank_colours_fall_back() {
        let side = nested(&[
            ("aspect_ratio", Value::from(0.5)),
            ("bg_color", Value::from("")),
            ("left_band_color", Value::from("#003399")),
        ]);
        let style = PlateStyle::from_value(&side).expect("configured side");
        assert_eq!(style.aspect_ratio, Some(0.5));
        assert_eq!(style.bg_color, None);
        assert_eq!(style.left_band_color.as_deref(), Some("#003399"));
    }
}
