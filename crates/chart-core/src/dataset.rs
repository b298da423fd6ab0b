// File: crates/chart-core/src/dataset.rs
// Summary: Titled collection of aligned series sharing one date axis, plus dataset-wide extrema.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};
use crate::extrema::{combine, Extrema};
use crate::series::Series;

/// Largest supported series value. Axis math sums and multiplies values in `i64`,
/// so the domain is kept to non-negative 32-bit integers.
pub const MAX_VALUE: i64 = i32::MAX as i64;

/// Fixed once loaded: only selection flags and cached extrema change afterwards.
/// Deserialization goes through [`Dataset::new`], so a decoded dataset is validated too.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DatasetRecord", into = "DatasetRecord"))]
pub struct Dataset {
    title: String,
    dates: Vec<DateTime<Utc>>,
    series: Vec<Series>,
    extrema: Extrema,
    full_range_max_y: i64,
}

impl Dataset {
    /// Validate and build a dataset. Every series must hold exactly one value per
    /// date, ids must be unique and non-empty, and there must be at least two dates.
    ///
    /// Extrema are computed once over `[0, N-1]`, which also fixes the overview scale.
    pub fn new(title: impl Into<String>, dates: Vec<DateTime<Utc>>, series: Vec<Series>) -> Result<Self> {
        let n = dates.len();
        if n < 2 {
            return Err(ChartError::TooFewDates(n));
        }
        let mut seen = HashSet::new();
        for s in &series {
            if s.id.is_empty() {
                return Err(ChartError::EmptySeriesId);
            }
            if !seen.insert(s.id.as_str()) {
                return Err(ChartError::DuplicateSeries(s.id.clone()));
            }
            if s.len() != n {
                return Err(ChartError::LengthMismatch { id: s.id.clone(), expected: n, actual: s.len() });
            }
            if let Some((index, &value)) = s.values().iter().enumerate().find(|(_, v)| !(0..=MAX_VALUE).contains(*v)) {
                return Err(ChartError::ValueOutOfRange { id: s.id.clone(), index, value });
            }
        }

        let mut dataset = Self { title: title.into(), dates, series, extrema: Extrema::EMPTY, full_range_max_y: 0 };
        dataset.compute_extrema(0, n - 1);
        dataset.full_range_max_y = dataset.extrema.max;
        Ok(dataset)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    /// Number of dates (N).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false for a constructed dataset (at least two dates); pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn series_index(&self, id: &str) -> Option<usize> {
        self.series.iter().position(|s| s.id == id)
    }

    pub fn selected_count(&self) -> usize {
        self.series.iter().filter(|s| s.is_selected()).count()
    }

    /// Flip one series' flag. Series are never removed.
    pub(crate) fn set_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        let len = self.series.len();
        let series = self.series.get_mut(index).ok_or(ChartError::SeriesOutOfBounds { index, len })?;
        series.set_selected(selected);
        Ok(())
    }

    /// Rescan every series over `[start, end)` and combine the selected ones.
    /// With nothing selected the result is `(0, 0)`.
    pub fn compute_extrema(&mut self, start: usize, end: usize) -> Extrema {
        let mut parts = Vec::with_capacity(self.series.len());
        for s in &mut self.series {
            let e = s.update_extrema(start, end);
            if s.is_selected() {
                parts.extend(e);
            }
        }
        self.extrema = combine(parts);
        self.extrema
    }

    /// Result of the last `compute_extrema` call.
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    pub fn max_y(&self) -> i64 {
        self.extrema.max
    }

    pub fn min_y(&self) -> i64 {
        self.extrema.min
    }

    /// Max over the full range at load time; the overview's fixed scale.
    pub fn full_range_max_y(&self) -> i64 {
        self.full_range_max_y
    }
}

/// Serialized shape of a [`Dataset`]. Extrema are recomputed on decode; the
/// load-time overview maximum is carried over since selection may have changed.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DatasetRecord {
    title: String,
    dates: Vec<DateTime<Utc>>,
    series: Vec<Series>,
    full_range_max_y: i64,
}

#[cfg(feature = "serde")]
impl From<Dataset> for DatasetRecord {
    fn from(d: Dataset) -> Self {
        Self { title: d.title, dates: d.dates, series: d.series, full_range_max_y: d.full_range_max_y }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<DatasetRecord> for Dataset {
    type Error = ChartError;

    fn try_from(r: DatasetRecord) -> Result<Self> {
        if !(0..=MAX_VALUE).contains(&r.full_range_max_y) {
            return Err(ChartError::ValueOutOfRange { id: "full_range_max_y".into(), index: 0, value: r.full_range_max_y });
        }
        let mut dataset = Dataset::new(r.title, r.dates, r.series)?;
        dataset.full_range_max_y = r.full_range_max_y;
        Ok(dataset)
    }
}
