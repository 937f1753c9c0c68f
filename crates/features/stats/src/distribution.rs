use serde::Serialize;
use tracing::debug;

/// Summary of one numeric field across the dataset.
///
/// Built once per evaluation pass from every successfully parsed value and
/// read-only afterwards. Quartiles use linear interpolation between the
/// closest ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
    /// Every sample, ascending.
    values: Vec<f64>,
}

impl Distribution {
    /// `None` when no finite value is supplied.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let dist = Self {
            min: values[0],
            q25: percentile(&values, 25.0),
            median: percentile(&values, 50.0),
            q75: percentile(&values, 75.0),
            max: values[values.len() - 1],
            values,
        };
        debug!(count = dist.count(), min = dist.min, max = dist.max, "Distribution computed");
        Some(dist)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Fraction of samples strictly below `value`, in `[0, 1]`.
    #[must_use]
    pub fn rank(&self, value: f64) -> f64 {
        let below = self.values.partition_point(|v| *v < value);
        below as f64 / self.values.len() as f64
    }

    /// Linear-interpolation percentile, `p` in `[0, 100]`.
    #[must_use]
    pub fn percentile(&self, p: f64) -> f64 {
        percentile(&self.values, p)
    }
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let pos = (p.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_interpolate() {
        let dist = Distribution::from_values([4.0, 1.0, 3.0, 2.0]).expect("non-empty");
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.q25, 1.75);
        assert_eq!(dist.median, 2.5);
        assert_eq!(dist.q75, 3.25);
        assert_eq!(dist.max, 4.0);
        assert_eq!(dist.values(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn single_sample_is_every_quantile() {
        let dist = Distribution::from_values([7.0]).expect("non-empty");
        assert_eq!((dist.min, dist.median, dist.max), (7.0, 7.0, 7.0));
        assert_eq!(dist.rank(7.0), 0.0);
        assert_eq!(dist.rank(8.0), 1.0);
    }

    #[test]
    fn empty_or_non_finite_input_has_no_distribution() {
        assert!(Distribution::from_values([]).is_none());
        assert!(Distribution::from_values([f64::NAN, f64::INFINITY]).is_none());
    }
}
