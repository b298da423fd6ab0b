// File: crates/chart-core/src/animation.rs
// Summary: Transition modes, the fixed-length eased tween and per-frame interpolation.

use std::f32::consts::PI;
use std::time::Duration;

use crate::axis::AxisScale;
use crate::types::TWEEN_DURATION;

/// Which transition the viewport is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationMode {
    #[default]
    Idle,
    /// Axis values interpolate; the step is unchanged so gridlines stay put.
    Simple,
    /// Step changes: old and new gridline sets cross-fade while the scale interpolates.
    Complex,
    /// Last series deselected; everything fades out at the current scale.
    ToEmpty,
    /// First series selected from empty; scale is already final, only opacity moves.
    FromEmpty,
}

/// Accelerate/decelerate curve over `[0, 1]`.
pub fn ease_in_out(x: f32) -> f32 {
    ((x.clamp(0.0, 1.0) + 1.0) * PI).cos() / 2.0 + 0.5
}

/// A time-bounded interpolation session driven by an external clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(duration: Duration) -> Self {
        Self { elapsed: Duration::ZERO, duration }
    }

    pub fn start() -> Self {
        Self::new(TWEEN_DURATION)
    }

    /// Advance by one frame and return the eased progress.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.progress()
    }

    /// Linear fraction of the duration that has elapsed.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Eased progress `t` in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        ease_in_out(self.fraction())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// What one frame should draw with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayValues {
    pub step_y: f64,
    pub max_y: f64,
    pub alpha_show: u8,
    pub alpha_hide: u8,
    pub t: f32,
}

impl DisplayValues {
    /// Nothing in flight: the committed scale at full opacity.
    pub fn settled(scale: AxisScale) -> Self {
        Self { step_y: scale.step as f64, max_y: scale.max as f64, alpha_show: 255, alpha_hide: 0, t: 1.0 }
    }
}

/// Pure per-frame interpolation between the committed scale and the pending one.
pub fn interpolate(mode: AnimationMode, from: AxisScale, to: AxisScale, t: f32) -> DisplayValues {
    let t = t.clamp(0.0, 1.0);
    if mode == AnimationMode::Idle {
        return DisplayValues::settled(from);
    }
    let alpha_show = (255.0 * t).round() as u8;
    let (step_y, max_y) = match mode {
        AnimationMode::Simple | AnimationMode::Complex => (
            lerp(from.step as f64, to.step as f64, t as f64),
            lerp(from.max as f64, to.max as f64, t as f64),
        ),
        _ => (from.step as f64, from.max as f64),
    };
    DisplayValues { step_y, max_y, alpha_show, alpha_hide: 255 - alpha_show, t }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
