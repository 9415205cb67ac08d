//! Cleaning Pipeline Module
//! Straight-line composition of the cleaning steps with a per-step summary.

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::data::{is_numeric_dtype, CleanerError, DataCleaner, DataLoader, LoaderError};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Cleaner(#[from] CleanerError),
}

/// Row counts recorded while the pipeline runs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CleaningReport {
    pub rows_loaded: usize,
    pub duplicates_removed: usize,
    pub zero_guest_rows_removed: usize,
    pub outliers_removed: usize,
    pub rows_remaining: usize,
}

/// Runs the cleaning steps in order against one booking table.
pub struct CleaningPipeline {
    outlier_column: String,
}

impl CleaningPipeline {
    /// `outlier_column` names the numeric column the IQR step filters on.
    pub fn new(outlier_column: impl Into<String>) -> Self {
        Self {
            outlier_column: outlier_column.into(),
        }
    }

    /// Load a CSV file and clean it.
    pub fn run(&self, file_path: &str) -> Result<(DataFrame, CleaningReport), PipelineError> {
        let mut loader = DataLoader::new();
        loader.load_csv(file_path)?;
        let df = loader
            .get_dataframe()
            .ok_or(LoaderError::NoData)?
            .clone();
        info!(rows = df.height(), path = file_path, "loaded booking data");
        self.run_on(df)
    }

    /// Clean an already-loaded table. Steps run in a fixed order: fill
    /// missing values, drop duplicates, drop zero-guest rows, derive the
    /// arrival date, drop IQR outliers, then validate the date range.
    pub fn run_on(&self, df: DataFrame) -> Result<(DataFrame, CleaningReport), PipelineError> {
        DataCleaner::ensure_required_columns(&df)?;
        if !is_numeric(&df, &self.outlier_column)? {
            return Err(CleanerError::NonNumericColumn(self.outlier_column.clone()).into());
        }

        let rows_loaded = df.height();

        let df = DataCleaner::fill_missing_values(&df)?;

        let before = df.height();
        let df = DataCleaner::remove_duplicates(&df)?;
        let duplicates_removed = before - df.height();
        info!(removed = duplicates_removed, "dropped duplicate rows");

        let before = df.height();
        let df = DataCleaner::remove_invalid_guests(&df)?;
        let zero_guest_rows_removed = before - df.height();
        info!(removed = zero_guest_rows_removed, "dropped zero-guest rows");

        let df = DataCleaner::create_arrival_date(&df)?;

        let before = df.height();
        let df = DataCleaner::remove_outliers_iqr(&df, &self.outlier_column)?;
        let outliers_removed = before - df.height();
        info!(
            removed = outliers_removed,
            column = self.outlier_column.as_str(),
            "dropped IQR outliers"
        );

        DataCleaner::validate_date_ranges(&df)?;

        let report = CleaningReport {
            rows_loaded,
            duplicates_removed,
            zero_guest_rows_removed,
            outliers_removed,
            rows_remaining: df.height(),
        };
        info!(rows = report.rows_remaining, "cleaning pipeline finished");
        Ok((df, report))
    }
}

fn is_numeric(df: &DataFrame, column: &str) -> Result<bool, CleanerError> {
    let column = df
        .column(column)
        .map_err(|_| CleanerError::MissingColumn(column.to_string()))?;
    Ok(is_numeric_dtype(column.dtype()))
}
