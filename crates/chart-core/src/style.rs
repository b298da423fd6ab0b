// File: crates/chart-core/src/style.rs
// Summary: Flat per-series draw style derived from the viewport state each frame.

use crate::theme::Color;
use crate::view::ViewportState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: Color,
    pub selected: bool,
    /// Opacity of the series' line on the main plot and in the overview.
    pub line_alpha: u8,
    /// Complement of `line_alpha`, for an outlined (deselected) legend chip.
    pub outline_alpha: u8,
}

/// Styles in dataset order. The series whose toggle is animating fades in or out with
/// the tween; every other series is fully shown when selected and hidden otherwise.
pub fn series_styles(state: &ViewportState) -> Vec<SeriesStyle> {
    let display = state.display();
    state
        .dataset()
        .series()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let selected = s.is_selected();
            let line_alpha = match state.pending_series() {
                Some(p) if p == i && selected => display.alpha_show,
                Some(p) if p == i => display.alpha_hide,
                _ if selected => 255,
                _ => 0,
            };
            SeriesStyle { color: s.color, selected, line_alpha, outline_alpha: 255 - line_alpha }
        })
        .collect()
}
