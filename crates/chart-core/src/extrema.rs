// File: crates/chart-core/src/extrema.rs
// Summary: Min/max scans over index ranges of integer series.

/// Bounds of a value range. `min <= max` always holds for non-empty input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extrema {
    pub min: i64,
    pub max: i64,
}

impl Extrema {
    /// What an empty selection degrades to: a flat chart at zero.
    pub const EMPTY: Extrema = Extrema { min: 0, max: 0 };

    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn merge(self, other: Extrema) -> Extrema {
        Extrema { min: self.min.min(other.min), max: self.max.max(other.max) }
    }
}

/// Single pass over `values[start..end]` (end exclusive, clamped to the slice).
/// Returns `None` when the range is empty.
pub fn compute_extrema(values: &[i64], start: usize, end: usize) -> Option<Extrema> {
    let end = end.min(values.len());
    let window = values.get(start..end)?;
    let (&first, rest) = window.split_first()?;
    Some(rest.iter().fold(Extrema::new(first, first), |acc, &v| Extrema {
        min: acc.min.min(v),
        max: acc.max.max(v),
    }))
}

/// Max of maxima and min of minima; `Extrema::EMPTY` when there is nothing to combine.
pub fn combine<I>(parts: I) -> Extrema
where
    I: IntoIterator<Item = Extrema>,
{
    parts.into_iter().reduce(Extrema::merge).unwrap_or(Extrema::EMPTY)
}
