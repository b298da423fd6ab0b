// File: crates/chart-core/src/dates.rs
// Summary: Date tick labels under the main plot with continuous density cross-fades.

use chrono::{DateTime, Duration, Utc};

use crate::geometry::RectF;
use crate::scale::WindowTransform;
use crate::types::{MIN_SHARE, STEP_COUNT};

/// Number of density bands, one per `MIN_SHARE` of track width.
const LEVELS: u32 = 5;

pub const DATE_FORMAT: &str = "%-d %b";

#[derive(Clone, Debug, PartialEq)]
pub struct DateLabel {
    pub x: f32,
    pub text: String,
    pub alpha: u8,
}

/// Labels spread over the full date span at a given density level (6, 7, 10, 15, 30).
pub fn label_count(level: u32) -> usize {
    STEP_COUNT * LEVELS as usize / level.clamp(1, LEVELS) as usize
}

/// Band the window width falls in and the opacity of that band's label set.
pub fn density_band(width_share: f32) -> (u32, f32) {
    let b = (width_share / MIN_SHARE).clamp(0.0, LEVELS as f32);
    let level = (b.ceil() as u32).clamp(1, LEVELS);
    let progress = (b - (level - 1) as f32).clamp(0.0, 1.0);
    (level, progress)
}

/// Date labels for the current window. The band's own set fades with the position
/// inside the band and the next denser set takes the remaining opacity, so the
/// density changes continuously while zooming.
pub fn date_labels(dates: &[DateTime<Utc>], track: RectF, transform: &WindowTransform) -> Vec<DateLabel> {
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return Vec::new();
    };
    let (level, progress) = density_band(transform.width_share);
    let mut labels = label_set(first, last, label_count(level), progress, track, transform);
    if level > 1 {
        labels.extend(label_set(first, last, label_count(level - 1), 1.0 - progress, track, transform));
    }
    labels
}

fn label_set(
    first: DateTime<Utc>,
    last: DateTime<Utc>,
    count: usize,
    opacity: f32,
    track: RectF,
    transform: &WindowTransform,
) -> Vec<DateLabel> {
    let alpha = (255.0 * opacity).round() as u8;
    if alpha == 0 || count < 2 {
        return Vec::new();
    }
    let span_ms = (last - first).num_milliseconds() as f64;
    (0..count)
        .filter_map(|i| {
            let f = i as f64 / (count - 1) as f64;
            let x = transform.apply(track.left + track.width() * f as f32);
            if x < track.left || x > track.right {
                return None;
            }
            let date = first + Duration::milliseconds((span_ms * f).round() as i64);
            Some(DateLabel { x, text: date.format(DATE_FORMAT).to_string(), alpha })
        })
        .collect()
}
