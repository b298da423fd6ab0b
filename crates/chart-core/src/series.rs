// File: crates/chart-core/src/series.rs
// Summary: A named, colored line of integer values aligned to the dataset dates.

use crate::extrema::{compute_extrema, Extrema};
use crate::theme::Color;

/// One line of the chart. Identity is the stable `id` label, so two series with
/// the same id compare equal whatever their values or selection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub id: String,
    pub name: String,
    pub color: Color,
    values: Vec<i64>,
    selected: bool,
    /// Extrema over the last range this series was scanned for.
    #[cfg_attr(feature = "serde", serde(skip))]
    extrema: Option<Extrema>,
}

impl Series {
    /// New series, selected by default.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Color, values: Vec<i64>) -> Self {
        Self { id: id.into(), name: name.into(), color, values, selected: true, extrema: None }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Possible for a loose series; a dataset rejects it unless it has no dates either.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Cached result of the last `update_extrema` call.
    pub fn extrema(&self) -> Option<Extrema> {
        self.extrema
    }

    pub(crate) fn update_extrema(&mut self, start: usize, end: usize) -> Option<Extrema> {
        self.extrema = compute_extrema(&self.values, start, end);
        self.extrema
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Series {}
