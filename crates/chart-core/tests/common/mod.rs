// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::time::Duration;

use chart_core::{Color, Dataset, Series, ViewportState};
use chrono::{DateTime, TimeZone, Utc};

pub const A: [i64; 10] = [100, 200, 150, 300, 250, 200, 100, 150, 200, 250];
pub const B: [i64; 10] = [400, 600, 500, 1000, 950, 700, 600, 500, 400, 300];

pub fn dates(n: usize) -> Vec<DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap();
    (0..n).map(|i| start + chrono::Duration::days(i as i64)).collect()
}

pub fn series(id: &str, values: &[i64]) -> Series {
    Series::new(id, id.to_uppercase(), Color::from_rgb(0x3c, 0xc2, 0x3f), values.to_vec())
}

/// Two series over ten days; `b` carries the peak at index 3.
pub fn two_series() -> Dataset {
    Dataset::new("Followers", dates(10), vec![series("a", &A), series("b", &B)]).unwrap()
}

/// Same data with only `a` selected.
pub fn only_a() -> Dataset {
    Dataset::new("Followers", dates(10), vec![series("a", &A), series("b", &B).with_selected(false)]).unwrap()
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Tick at 60 fps until the running tween (if any) completes.
pub fn run_out(state: &mut ViewportState) {
    while state.tick(ms(16)) {}
}
