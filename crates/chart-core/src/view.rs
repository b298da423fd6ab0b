// File: crates/chart-core/src/view.rs
// Viewport session: visible range, committed/pending axis scale and the rescale state machine.

use std::time::Duration;

use log::{debug, trace};

use crate::animation::{interpolate, AnimationMode, DisplayValues, Tween};
use crate::axis::AxisScale;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};

/// Window of date indices shown on the main plot. `start < end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    /// Fully zoomed out: `[0, N-1]`.
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len.saturating_sub(1).max(1) }
    }
}

/// Minimal persisted form of a session. Transient animation fields are not kept,
/// so a restored session always starts idle.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSnapshot {
    pub current_max_y: i64,
    pub current_step_y: i64,
    pub dataset: Dataset,
    pub visible_start: usize,
    pub visible_end: usize,
}

/// Per-dataset view session. Single-threaded: every mutation runs to completion
/// before the next frame is requested, and at most one tween is ever in flight.
#[derive(Clone, Debug)]
pub struct ViewportState {
    dataset: Dataset,
    current: AxisScale,
    pending: Option<AxisScale>,
    visible: VisibleRange,
    mode: AnimationMode,
    pending_series: Option<usize>,
    tween: Option<Tween>,
    display: DisplayValues,
    is_empty: bool,
}

impl ViewportState {
    pub fn new(mut dataset: Dataset) -> Self {
        let visible = VisibleRange::full(dataset.len());
        let current = AxisScale::from_extrema(dataset.compute_extrema(visible.start, visible.end));
        let is_empty = dataset.selected_count() == 0;
        Self::idle(dataset, current, visible, is_empty)
    }

    /// Rebuild an idle session from its persisted form.
    pub fn restore(snapshot: ViewportSnapshot) -> Result<Self> {
        let ViewportSnapshot { current_max_y, current_step_y, mut dataset, visible_start, visible_end } = snapshot;
        let len = dataset.len();
        if visible_start >= visible_end || visible_end > len {
            return Err(ChartError::InvalidRange { start: visible_start, end: visible_end, len });
        }
        dataset.compute_extrema(visible_start, visible_end);
        let is_empty = dataset.selected_count() == 0;
        let current = AxisScale { step: current_step_y, max: current_max_y };
        let visible = VisibleRange { start: visible_start, end: visible_end };
        Ok(Self::idle(dataset, current, visible, is_empty))
    }

    fn idle(dataset: Dataset, current: AxisScale, visible: VisibleRange, is_empty: bool) -> Self {
        Self {
            dataset,
            current,
            pending: None,
            visible,
            mode: AnimationMode::Idle,
            pending_series: None,
            tween: None,
            display: DisplayValues::settled(current),
            is_empty,
        }
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            current_max_y: self.current.max,
            current_step_y: self.current.step,
            dataset: self.dataset.clone(),
            visible_start: self.visible.start,
            visible_end: self.visible.end,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Committed scale (the tween's starting point while one runs).
    pub fn current(&self) -> AxisScale {
        self.current
    }

    /// Target scale of the running tween.
    pub fn pending(&self) -> Option<AxisScale> {
        self.pending
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.visible
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Index of the series whose toggle started the running tween.
    pub fn pending_series(&self) -> Option<usize> {
        self.pending_series
    }

    /// Interpolated values for the current frame.
    pub fn display(&self) -> DisplayValues {
        self.display
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Set series `index` to `selected` and start the matching transition.
    /// Re-asserting the current flag is a no-op.
    pub fn toggle_series(&mut self, index: usize, selected: bool) -> Result<()> {
        let len = self.dataset.series().len();
        let series = self.dataset.series().get(index).ok_or(ChartError::SeriesOutOfBounds { index, len })?;
        if series.is_selected() == selected {
            return Ok(());
        }
        self.dataset.set_selected(index, selected)?;
        self.settle_in_flight();

        let selected_count = self.dataset.selected_count();
        if selected_count == 0 {
            self.pending = Some(self.current);
            self.mode = AnimationMode::ToEmpty;
        } else if selected_count == 1 && selected {
            self.current = self.rescan();
            self.pending = Some(self.current);
            self.mode = AnimationMode::FromEmpty;
        } else {
            let target = self.rescan();
            self.pending = Some(target);
            self.mode = self.rescale_mode(target);
        }

        self.pending_series = Some(index);
        self.start_tween();
        Ok(())
    }

    /// Pan/zoom path. Recomputes extrema over the new window and starts a rescale
    /// when the max moved. Returns whether a tween was started.
    pub fn set_visible_range(&mut self, range: VisibleRange) -> bool {
        debug_assert!(range.start < range.end, "empty visible range {range:?}");
        if range == self.visible {
            return false;
        }
        let prev_max = self.dataset.max_y();
        self.visible = range;
        let target = self.rescan();
        if self.dataset.max_y() == prev_max || self.dataset.selected_count() == 0 {
            return false;
        }
        debug!("new max y {} -> {} over {:?}", prev_max, self.dataset.max_y(), range);

        self.settle_in_flight();
        self.pending = Some(target);
        self.mode = self.rescale_mode(target);
        self.pending_series = None;
        self.start_tween();
        true
    }

    /// One frame from the external clock. Returns whether a redraw is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let t = tween.advance(dt);
        let finished = tween.is_finished();
        self.display = interpolate(self.mode, self.current, self.pending.unwrap_or(self.current), t);
        if finished {
            self.complete();
        }
        true
    }

    fn rescale_mode(&self, target: AxisScale) -> AnimationMode {
        if target.step != self.current.step { AnimationMode::Complex } else { AnimationMode::Simple }
    }

    fn rescan(&mut self) -> AxisScale {
        AxisScale::from_extrema(self.dataset.compute_extrema(self.visible.start, self.visible.end))
    }

    fn start_tween(&mut self) {
        debug!(
            "start {:?}: step {} -> {}",
            self.mode,
            self.current.step,
            self.pending.map_or(self.current.step, |p| p.step)
        );
        let tween = Tween::start();
        self.display = interpolate(self.mode, self.current, self.pending.unwrap_or(self.current), tween.progress());
        self.tween = Some(tween);
    }

    /// Force-complete a running tween: its interpolated value becomes the new baseline.
    fn settle_in_flight(&mut self) {
        if self.tween.take().is_none() {
            return;
        }
        trace!("interrupting {:?} at t={}", self.mode, self.display.t);
        match self.mode {
            AnimationMode::FromEmpty => self.current = AxisScale::from_extrema(self.dataset.extrema()),
            AnimationMode::Simple | AnimationMode::Complex => {
                self.current = AxisScale { step: self.display.step_y as i64, max: self.display.max_y as i64 };
            }
            AnimationMode::ToEmpty | AnimationMode::Idle => {}
        }
        self.pending = None;
        self.pending_series = None;
        self.display = DisplayValues::settled(self.current);
    }

    fn complete(&mut self) {
        self.current = match self.mode {
            AnimationMode::FromEmpty => AxisScale::from_extrema(self.dataset.extrema()),
            _ => self.pending.unwrap_or(self.current),
        };
        debug!("finished {:?}: step {}", self.mode, self.current.step);
        self.is_empty = self.mode == AnimationMode::ToEmpty;
        self.pending = None;
        self.pending_series = None;
        self.tween = None;
        self.mode = AnimationMode::Idle;
        self.display = DisplayValues::settled(self.current);
    }
}
