// File: crates/demo/src/main.rs
// Summary: Demo loads chart datasets, replays toggles/drags/ticks and renders PNG frames per step.

mod loader;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{theme, Chart, Layout, ViewportSnapshot};
use chart_render_skia::{render_to_png, RenderOptions};
use log::info;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample.json"));
    let theme = theme::find(&args.next().unwrap_or_else(|| "day".into()));

    let datasets = loader::load_path(&input).with_context(|| format!("failed to load '{}'", input.display()))?;
    info!("Loaded {} dataset(s) from {}", datasets.len(), input.display());

    let opts = RenderOptions { scale: 2.0, ..Default::default() };
    let out_dir = PathBuf::from("target/out");
    for (k, dataset) in datasets.into_iter().enumerate() {
        let mut chart = Chart::new(dataset, Layout::default(), theme);
        replay(&mut chart, &opts, &out_dir.join(format!("chart{k}")))?;
    }
    Ok(())
}

/// Scripted session: idle, toggle, zoom, pan, theme swap, suspend/restore.
fn replay(chart: &mut Chart, opts: &RenderOptions, dir: &Path) -> Result<()> {
    let mut frame = 0usize;
    let mut shoot = |chart: &Chart, label: &str| -> Result<()> {
        let path = dir.join(format!("{frame:03}_{label}.png"));
        render_to_png(chart, opts, &path)?;
        info!("Wrote {}", path.display());
        frame += 1;
        Ok(())
    };

    shoot(chart, "idle")?;

    if let Some(first) = chart.state().dataset().series().first().map(|s| s.id.clone()) {
        chart.toggle_series_by_id(&first)?;
        run_tween(chart, |c| shoot(c, "toggle_off"))?;
        chart.toggle_series_by_id(&first)?;
        run_tween(chart, |c| shoot(c, "toggle_on"))?;
    }

    // zoom in from the left handle, then pan back left
    let track = chart.slider().track();
    let y = track.center_y();
    if chart.pointer_down(track.left + 1.0, y) {
        chart.drag_by(track.width() * 0.6);
        chart.pointer_up();
        run_tween(chart, |c| shoot(c, "zoom"))?;
    }
    let window = chart.slider().window();
    if chart.pointer_down(window.center_x(), y) {
        chart.drag_by(-track.width() * 0.3);
        chart.pointer_up();
        run_tween(chart, |c| shoot(c, "pan"))?;
    }

    chart.set_theme(chart.theme().toggled());
    shoot(chart, "theme")?;

    let json = serde_json::to_string(&chart.snapshot())?;
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("snapshot.json"), &json)?;
    let snapshot: ViewportSnapshot = serde_json::from_str(&json).context("reading snapshot back")?;
    let restored = Chart::restore(snapshot, *chart.layout(), *chart.theme())?;
    info!("Restored session at {:?}", restored.state().visible_range());
    shoot(&restored, "restored")?;
    Ok(())
}

/// Tick until the running tween completes, shooting every fourth frame.
fn run_tween(chart: &mut Chart, mut shoot: impl FnMut(&Chart) -> Result<()>) -> Result<()> {
    let mut n = 0;
    while chart.tick(FRAME) {
        if n % 4 == 0 {
            shoot(chart)?;
        }
        n += 1;
    }
    shoot(chart)
}
