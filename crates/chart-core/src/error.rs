// File: crates/chart-core/src/error.rs
// Summary: Error type for dataset construction, lookups and session restore.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("dataset needs at least two dates, got {0}")]
    TooFewDates(usize),

    #[error("series `{id}` has {actual} values but the dataset has {expected} dates")]
    LengthMismatch { id: String, expected: usize, actual: usize },

    #[error("duplicate series id `{0}`")]
    DuplicateSeries(String),

    #[error("series `{id}` value {value} at index {index} is outside 0..=2147483647")]
    ValueOutOfRange { id: String, index: usize, value: i64 },

    #[error("series id must not be empty")]
    EmptySeriesId,

    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    #[error("visible range {start}..{end} is not inside 0..={len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("series index {index} out of bounds ({len} series)")]
    SeriesOutOfBounds { index: usize, len: usize },

    #[error("no series with id `{0}`")]
    UnknownSeries(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
