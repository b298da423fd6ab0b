// File: crates/chart-core/src/axis.rs
// Summary: Nice-number Y axis step and compact value labels.

use crate::extrema::Extrema;
use crate::types::STEP_COUNT;

const SUFFIXES: [(i64, &str); 2] = [(1_000_000, "M"), (1_000, "K")];

/// Gridline step and the top gridline value (`step * (STEP_COUNT - 1)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisScale {
    pub step: i64,
    pub max: i64,
}

impl AxisScale {
    pub const fn from_step(step: i64) -> Self {
        Self { step, max: step.saturating_mul(STEP_COUNT as i64 - 1) }
    }

    pub fn from_extrema(extrema: Extrema) -> Self {
        Self::from_step(y_value_step(extrema.min, extrema.max))
    }
}

/// Round gridline step for a visible value range.
///
/// The range is wrapped as `min + max` rather than `max - min`: the plot is always
/// drawn against a virtual zero baseline. Results are 0 for a non-positive wrap
/// (empty selection); negative data is outside the supported domain.
pub fn y_value_step(min_y: i64, max_y: i64) -> i64 {
    let wrap_max = min_y.saturating_add(max_y);
    if wrap_max <= 0 {
        return 0;
    }
    let intervals = STEP_COUNT as i64 - 1;
    let step_raw = (wrap_max as f64 / intervals as f64) as i64;
    let step_adjusted = (wrap_max - step_raw / 2) / intervals;
    let magnitude = 10i64.pow(digit_count(wrap_max).saturating_sub(2));
    (step_adjusted as f64 / magnitude as f64).round_ties_even() as i64 * magnitude
}

fn digit_count(v: i64) -> u32 {
    v.checked_ilog10().map_or(1, |d| d + 1)
}

/// Compact label: plain integers below 1000, otherwise one decimal with a K/M suffix
/// when that decimal is meaningful (`1500 -> "1.5K"`, `12000 -> "12K"`).
pub fn readable_label(value: i64) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    let (threshold, suffix) = SUFFIXES
        .iter()
        .copied()
        .find(|&(t, _)| value >= t)
        .unwrap_or(SUFFIXES[1]);
    let truncated = value / (threshold / 10);
    if truncated < 100 && truncated % 10 != 0 {
        format!("{}{}", truncated as f64 / 10.0, suffix)
    } else {
        format!("{}{}", truncated / 10, suffix)
    }
}
