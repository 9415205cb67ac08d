//! Data module - CSV loading and cleaning steps

mod cleaner;
mod loader;

pub use cleaner::{
    CleanerError, DataCleaner, MAX_ARRIVAL_YEAR, MIN_ARRIVAL_YEAR, REQUIRED_COLUMNS,
};
pub use loader::{is_numeric_dtype, DataLoader, LoaderError};
