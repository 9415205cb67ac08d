//! Booking Cleaner - hotel booking CSV cleaning pipeline
//!
//! Loads a booking table from CSV and applies a fixed sequence of cleaning
//! steps: fill missing values with domain defaults, drop exact duplicates,
//! drop zero-guest rows, derive a normalized `arrival_date` column, drop IQR
//! outliers from a chosen numeric column, and validate that arrival years
//! fall within [2015, 2017].

pub mod data;
pub mod pipeline;
pub mod stats;

pub use data::{
    CleanerError, DataCleaner, DataLoader, LoaderError, MAX_ARRIVAL_YEAR, MIN_ARRIVAL_YEAR,
    REQUIRED_COLUMNS,
};
pub use pipeline::{CleaningPipeline, CleaningReport, PipelineError};
pub use stats::{IqrBounds, StatsCalculator};
