// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) pixel scales plus the horizontal window transform.

/// Maps a date index onto the full-width track: `left + i * step_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f32,
    pub step_px: f32,
}

impl IndexScale {
    /// Spread `len` indices over `[left_px, left_px + width_px]`.
    pub fn new(left_px: f32, width_px: f32, len: usize) -> Self {
        let gaps = len.saturating_sub(1).max(1) as f32;
        Self { left_px, step_px: width_px / gaps }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.step_px
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f32 {
        if self.step_px == 0.0 { 0.0 } else { (px - self.left_px) / self.step_px }
    }
}

/// Maps a value upward from a baseline: `baseline - v * px_per_unit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub baseline_px: f32,
    pub px_per_unit: f32,
}

impl ValueScale {
    /// Scale where one gridline step (`step` value units) spans `axis_step_px` pixels.
    /// A zero step (empty chart) flattens everything onto the baseline.
    pub fn for_step(baseline_px: f32, axis_step_px: f32, step: f64) -> Self {
        let px_per_unit = if step > 0.0 { (axis_step_px as f64 / step) as f32 } else { 0.0 };
        Self { baseline_px, px_per_unit }
    }

    /// Scale where `max` lands exactly `height_px` above the baseline.
    pub fn fit(baseline_px: f32, height_px: f32, max: i64) -> Self {
        let px_per_unit = if max > 0 { height_px / max as f32 } else { 0.0 };
        Self { baseline_px, px_per_unit }
    }
    #[inline]
    pub fn to_px(&self, value: f64) -> f32 {
        self.baseline_px - (value * self.px_per_unit as f64) as f32
    }
}

/// Horizontal scale+translate taking the slider window onto the whole track,
/// so panning and zooming never re-tessellate the polylines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowTransform {
    pub origin_px: f32,
    pub width_px: f32,
    pub left_share: f32,
    pub width_share: f32,
}

impl WindowTransform {
    pub fn new(origin_px: f32, width_px: f32, left_share: f32, width_share: f32) -> Self {
        Self { origin_px, width_px, left_share, width_share: width_share.max(f32::EPSILON) }
    }

    /// Transform for an index window `[start, end]` over `len` dates, using the
    /// same fractions the slider derives its range from.
    pub fn from_visible_range(origin_px: f32, width_px: f32, start: usize, end: usize, len: usize) -> Self {
        let len = len.max(2) as f32;
        let left_share = start as f32 / (len - 1.0);
        let right_share = (end as f32 / len).max(left_share);
        Self::new(origin_px, width_px, left_share, right_share - left_share)
    }

    /// Horizontal zoom factor.
    pub fn scale(&self) -> f32 {
        1.0 / self.width_share
    }

    /// Horizontal shift applied after scaling.
    pub fn translation(&self) -> f32 {
        self.origin_px - self.origin_px * self.scale() - self.width_px * self.left_share * self.scale()
    }

    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        x * self.scale() + self.translation()
    }
}
