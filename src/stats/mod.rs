//! Stats module - quantiles and IQR outlier bounds

mod calculator;

pub use calculator::{IqrBounds, StatsCalculator, IQR_FENCE_FACTOR};
