use crate::distribution::Distribution;
use crate::numeric::parse_numeric;
use geohint_domain::Value;
use geohint_domain::config::RenderConfig;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A label background.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Color {
    /// A CSS colour name used when there is nothing to rank.
    Neutral(Cow<'static, str>),
    Rgba { red: u8, green: u8, blue: u8, alpha: f64 },
}

impl Color {
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral(_))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral(name) => f.write_str(name),
            Self::Rgba { red, green, blue, alpha } => {
                write!(f, "rgba({red}, {green}, {blue}, {alpha})")
            },
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// One row of the colour legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub range: &'static str,
    pub color: Color,
    pub description: &'static str,
}

const LEGEND: [(&str, (u8, u8, u8), &str); 5] = [
    ("0-20%", (255, 0, 0), "Bottom quintile"),
    ("20-40%", (255, 128, 0), "Second quintile"),
    ("40-60%", (255, 255, 0), "Middle quintile"),
    ("60-80%", (128, 255, 0), "Fourth quintile"),
    ("80-100%", (0, 255, 0), "Top quintile"),
];

/// Red → yellow → green gradient over percentile ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    alpha: f64,
    neutral: Cow<'static, str>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for Gradient {
    fn from(config: &RenderConfig) -> Self {
        Self { alpha: config.gradient_alpha, neutral: Cow::Owned(config.neutral_background.clone()) }
    }
}

impl Gradient {
    #[must_use]
    pub fn neutral(&self) -> Color {
        Color::Neutral(self.neutral.clone())
    }

    /// Colour at `rank` (clamped to `[0, 1]`): red to yellow below 0.5,
    /// yellow to green from 0.5 up.
    #[must_use]
    pub fn at(&self, rank: f64) -> Color {
        let rank = if rank.is_nan() { 0.0 } else { rank.clamp(0.0, 1.0) };
        let (red, green) = if rank < 0.5 {
            (255, (255.0 * rank * 2.0) as u8)
        } else {
            ((255.0 * (1.0 - (rank - 0.5) * 2.0)) as u8, 255)
        };
        Color::Rgba { red, green, blue: 0, alpha: self.alpha }
    }

    /// Background for a resolved value: neutral when it does not parse as a
    /// number or there is no distribution, else the colour of its rank.
    #[must_use]
    pub fn color(&self, value: &Value, distribution: Option<&Distribution>) -> Color {
        match (parse_numeric(value), distribution) {
            (Some(n), Some(dist)) => self.at(dist.rank(n)),
            _ => self.neutral(),
        }
    }

    /// The five quintile swatches.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        LEGEND
            .iter()
            .map(|&(range, (red, green, blue), description)| LegendEntry {
                range,
                color: Color::Rgba { red, green, blue, alpha: self.alpha },
                description,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_and_midpoint() {
        let gradient = Gradient::default();
        assert_eq!(gradient.at(0.0).to_string(), "rgba(255, 0, 0, 0.4)");
        assert_eq!(gradient.at(0.25).to_string(), "rgba(255, 127, 0, 0.4)");
        assert_eq!(gradient.at(0.5).to_string(), "rgba(255, 255, 0, 0.4)");
        assert_eq!(gradient.at(0.75).to_string(), "rgba(127, 255, 0, 0.4)");
        assert_eq!(gradient.at(1.0).to_string(), "rgba(0, 255, 0, 0.4)");
    }

    #[test]
    fn neutral_without_number_or_distribution() {
        let gradient = Gradient::default();
        let dist = Distribution::from_values([1.0, 2.0]);
        assert_eq!(gradient.color(&Value::from("n/a"), dist.as_ref()).to_string(), "white");
        assert!(gradient.color(&Value::from(1.5), None).is_neutral());
    }

    #[test]
    fn legend_has_five_quintiles() {
        let legend = Gradient::default().legend();
        assert_eq!(legend.len(), 5);
        assert_eq!(legend[0].range, "0-20%");
        assert_eq!(legend[1].color.to_string(), "rgba(255, 128, 0, 0.4)");
        assert_eq!(legend[4].description, "Top quintile");
    }
}
