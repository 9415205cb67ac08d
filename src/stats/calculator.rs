//! Statistics Calculator Module
//! Quantile estimation and IQR bounds for outlier detection.

/// Multiplier applied to the IQR when deriving outlier bounds (Tukey's fences).
pub const IQR_FENCE_FACTOR: f64 = 1.5;

/// Quartile-based bounds for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Check whether a value falls inside the bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Handles quantile computations for the cleaning steps.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Calculate a quantile using linear interpolation between closest ranks
    /// (NumPy compatible). `q` is a fraction in [0, 1]; input must be sorted.
    pub fn quantile(sorted_values: &[f64], q: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = q * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Compute Q1/Q3 and the Tukey fences for a set of values.
    /// The input is sorted internally; nulls must already be stripped.
    pub fn iqr_bounds(values: &[f64]) -> IqrBounds {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = Self::quantile(&sorted, 0.25);
        let q3 = Self::quantile(&sorted, 0.75);
        let iqr = q3 - q1;

        IqrBounds {
            q1,
            q3,
            iqr,
            lower: q1 - IQR_FENCE_FACTOR * iqr,
            upper: q3 + IQR_FENCE_FACTOR * iqr,
        }
    }
}
