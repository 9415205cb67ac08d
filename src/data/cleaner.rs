//! Data Cleaner Module
//! The individual cleaning steps applied to a booking table. Each step takes
//! a DataFrame by reference and returns a new DataFrame.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use thiserror::Error;

use crate::stats::StatsCalculator;

/// Earliest arrival year the dataset is expected to contain.
pub const MIN_ARRIVAL_YEAR: i32 = 2015;
/// Latest arrival year the dataset is expected to contain.
pub const MAX_ARRIVAL_YEAR: i32 = 2017;

/// Columns that must be present before the pipeline runs.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "children",
    "agent",
    "company",
    "country",
    "adults",
    "babies",
    "arrival_date_year",
    "arrival_date_month",
    "arrival_date_day_of_month",
];

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),
    #[error("No non-null arrival dates to validate")]
    NoArrivalDates,
    #[error("Arrival year {year} outside expected range [{MIN_ARRIVAL_YEAR}, {MAX_ARRIVAL_YEAR}]")]
    ArrivalYearOutOfRange { year: i32 },
}

/// Handles the booking-table cleaning steps.
pub struct DataCleaner;

impl DataCleaner {
    /// Check that every column the pipeline touches exists.
    pub fn ensure_required_columns(df: &DataFrame) -> Result<(), CleanerError> {
        let names = df.get_column_names();
        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|n| n.as_str() == required) {
                return Err(CleanerError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }

    /// Replace nulls with domain defaults: children/agent/company get 0,
    /// country gets "Unknown". Other columns are untouched.
    pub fn fill_missing_values(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let filled = df
            .clone()
            .lazy()
            .with_columns([
                col("children").fill_null(lit(0)),
                col("agent").fill_null(lit(0)),
                col("company").fill_null(lit(0)),
                col("country").fill_null(lit("Unknown")),
            ])
            .collect()?;
        Ok(filled)
    }

    /// Drop rows that duplicate an earlier row on every column, keeping the
    /// first occurrence and preserving the order of survivors.
    pub fn remove_duplicates(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let unique = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
        Ok(unique)
    }

    /// Keep only rows where adults + children + babies exceeds zero.
    pub fn remove_invalid_guests(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let filtered = df
            .clone()
            .lazy()
            .filter((col("adults") + col("children") + col("babies")).gt(lit(0)))
            .collect()?;
        Ok(filtered)
    }

    /// Combine the raw year/month/day columns into an `arrival_date` Date
    /// column. Rows whose parts do not form a valid date get a null date and
    /// are retained.
    pub fn create_arrival_date(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let years = df.column("arrival_date_year")?.cast(&DataType::Int64)?;
        let years = years.i64()?;
        let months = df.column("arrival_date_month")?.cast(&DataType::String)?;
        let months = months.str()?;
        let days = df
            .column("arrival_date_day_of_month")?
            .cast(&DataType::Int64)?;
        let days = days.i64()?;

        let mut dates: Vec<Option<NaiveDate>> = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let date = match (years.get(i), months.get(i), days.get(i)) {
                (Some(y), Some(m), Some(d)) => parse_arrival_date(y, m, d),
                _ => None,
            };
            dates.push(date);
        }

        let mut out = df.clone();
        out.with_column(Series::new("arrival_date".into(), dates))?;
        Ok(out)
    }

    /// Remove IQR outliers from one numeric column. Quartiles use linear
    /// interpolation; bounds are Q1 - 1.5*IQR and Q3 + 1.5*IQR, inclusive.
    /// Nulls in the column do not contribute to the quartiles and their rows
    /// are dropped by the filter. An empty column leaves the table unchanged.
    pub fn remove_outliers_iqr(df: &DataFrame, column: &str) -> Result<DataFrame, CleanerError> {
        let series = df.column(column)?.cast(&DataType::Float64)?;
        let ca = series.f64()?;
        let values: Vec<f64> = ca.into_iter().flatten().filter(|v| !v.is_nan()).collect();
        if values.is_empty() {
            return Ok(df.clone());
        }

        let bounds = StatsCalculator::iqr_bounds(&values);
        let filtered = df
            .clone()
            .lazy()
            .filter(
                col(column)
                    .gt_eq(lit(bounds.lower))
                    .and(col(column).lt_eq(lit(bounds.upper))),
            )
            .collect()?;
        Ok(filtered)
    }

    /// Hard sanity check on the derived dates: minimum arrival year must be
    /// >= 2015 and maximum <= 2017. Null dates are excluded from the min/max;
    /// a table with no non-null dates fails the check.
    pub fn validate_date_ranges(df: &DataFrame) -> Result<(), CleanerError> {
        let dates = df.column("arrival_date")?.date()?;

        let mut min_year: Option<i32> = None;
        let mut max_year: Option<i32> = None;
        for date in dates.as_date_iter().flatten() {
            let year = date.year();
            min_year = Some(min_year.map_or(year, |m| m.min(year)));
            max_year = Some(max_year.map_or(year, |m| m.max(year)));
        }

        let min_year = min_year.ok_or(CleanerError::NoArrivalDates)?;
        let max_year = max_year.ok_or(CleanerError::NoArrivalDates)?;

        if min_year < MIN_ARRIVAL_YEAR {
            return Err(CleanerError::ArrivalYearOutOfRange { year: min_year });
        }
        if max_year > MAX_ARRIVAL_YEAR {
            return Err(CleanerError::ArrivalYearOutOfRange { year: max_year });
        }
        Ok(())
    }
}

/// Parse one row's date parts. Month may be a full name ("July"), an
/// abbreviation ("Jul") or a number ("7"). Returns None when the parts do not
/// form a real calendar date.
fn parse_arrival_date(year: i64, month: &str, day: i64) -> Option<NaiveDate> {
    let raw = format!("{}-{}-{}", year, month.trim(), day);
    for format in ["%Y-%B-%d", "%Y-%b-%d", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(&raw, format) {
            return Some(date);
        }
    }
    None
}
