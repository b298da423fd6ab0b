// File: crates/chart-render-skia/tests/common/mod.rs
// Purpose: Deterministic chart fixture shared by the render tests.
#![allow(dead_code)]

use chart_core::{Chart, Color, Dataset, Layout, Series, Theme};
use chrono::{TimeZone, Utc};

pub fn chart(theme: Theme) -> Chart {
    let start = Utc.with_ymd_and_hms(2019, 4, 1, 0, 0, 0).unwrap();
    let dates = (0..20).map(|i| start + chrono::Duration::days(i)).collect();
    let joined: Vec<i64> = (0..20).map(|i| 40 + (i * 37 % 23) * 5).collect();
    let left: Vec<i64> = (0..20).map(|i| 20 + (i * 13 % 17) * 3).collect();
    let dataset = Dataset::new(
        "Followers",
        dates,
        vec![
            Series::new("y0", "Joined", Color::from_rgb(0x3c, 0xc2, 0x3f), joined),
            Series::new("y1", "Left", Color::from_rgb(0xf3, 0x4c, 0x44), left),
        ],
    )
    .unwrap();
    Chart::new(dataset, Layout::with_width(360.0), theme)
}
