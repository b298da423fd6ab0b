// File: crates/demo/src/loader.rs
// Summary: Dataset ingestion from the columnar chart JSON format and from date-indexed CSV.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chart_core::{Color, Dataset, Series};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// Colors handed out to CSV columns, which carry none of their own.
const PALETTE: [&str; 6] = ["#3CC23F", "#F34C44", "#4681BB", "#E8AF14", "#9E5BD2", "#2BB3C9"];

/// One chart of the columnar format: `columns` holds `[id, v0, v1, ...]` rows and the
/// `x` column carries epoch-millisecond timestamps.
#[derive(Debug, Deserialize)]
struct RawChart {
    columns: Vec<Vec<Value>>,
    types: HashMap<String, String>,
    #[serde(default)]
    names: HashMap<String, String>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    title: Option<String>,
}

pub fn load_path(path: &Path) -> Result<Vec<Dataset>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            load_json(&text)
        }
        "csv" | "cvs" => Ok(vec![load_csv(path)?]),
        _ => bail!("unsupported input '{}': expected .json or .csv", path.display()),
    }
}

/// Parse a JSON array of charts (a single chart object is accepted too).
pub fn load_json(text: &str) -> Result<Vec<Dataset>> {
    let value: Value = serde_json::from_str(text).context("parsing chart JSON")?;
    let raws: Vec<RawChart> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    raws.into_iter()
        .enumerate()
        .map(|(k, raw)| {
            let title = raw.title.clone().unwrap_or_else(|| format!("Chart #{}", k + 1));
            to_dataset(title, raw).with_context(|| format!("chart #{}", k + 1))
        })
        .collect()
}

fn to_dataset(title: String, raw: RawChart) -> Result<Dataset> {
    let mut dates = None;
    let mut series = Vec::new();
    for column in &raw.columns {
        let (head, rest) = column.split_first().ok_or_else(|| anyhow!("empty column"))?;
        let id = head.as_str().ok_or_else(|| anyhow!("column id must be a string, got {head}"))?;
        let values = rest
            .iter()
            .map(|v| v.as_i64().ok_or_else(|| anyhow!("column '{id}': non-integer value {v}")))
            .collect::<Result<Vec<i64>>>()?;

        match raw.types.get(id).map(String::as_str) {
            Some("x") => {
                dates = Some(values.into_iter().map(from_millis).collect::<Result<Vec<_>>>()?);
            }
            Some("line") => {
                let color = match raw.colors.get(id) {
                    Some(hex) => Color::parse_hex(hex)?,
                    None => palette(series.len()),
                };
                let name = raw.names.get(id).cloned().unwrap_or_else(|| id.to_string());
                series.push(Series::new(id, name, color, values));
            }
            Some(other) => warn!("skipping column '{id}' of unsupported type '{other}'"),
            None => bail!("column '{id}' has no type"),
        }
    }
    let dates = dates.ok_or_else(|| anyhow!("no x column"))?;
    debug!("{title}: {} dates, {} series", dates.len(), series.len());
    Ok(Dataset::new(title, dates, series)?)
}

/// CSV with a `date` column followed by one integer column per series.
/// Dates are epoch seconds/milliseconds or `YYYY-MM-DD`.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let i_date = headers
        .iter()
        .position(|h| matches!(h.to_lowercase().as_str(), "date" | "time" | "timestamp" | "x"))
        .ok_or_else(|| anyhow!("no date column in {:?}", headers))?;
    let ids: Vec<(usize, &String)> = headers.iter().enumerate().filter(|&(i, _)| i != i_date).collect();

    let mut dates = Vec::new();
    let mut columns = vec![Vec::new(); ids.len()];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw_date = rec.get(i_date).unwrap_or_default();
        dates.push(parse_date(raw_date).ok_or_else(|| anyhow!("row {}: bad date '{raw_date}'", row + 1))?);
        for (col, &(i, id)) in columns.iter_mut().zip(&ids) {
            let cell = rec.get(i).unwrap_or_default();
            let v = cell.parse::<i64>().with_context(|| format!("row {}: column '{id}' value '{cell}'", row + 1))?;
            col.push(v);
        }
    }

    let title = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "Chart".into());
    let series = ids
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(k, (&(_, id), values))| Series::new(id.as_str(), id.as_str(), palette(k), values))
        .collect();
    Ok(Dataset::new(title, dates, series)?)
}

fn palette(k: usize) -> Color {
    let hex = PALETTE[k % PALETTE.len()];
    Color::parse_hex(hex).unwrap_or(Color::from_rgb(0x80, 0x80, 0x80))
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single().ok_or_else(|| anyhow!("timestamp {ms} out of range"))
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs epoch sec
        let ms = if n > 10_i64.pow(11) { n } else { n * 1000 };
        return Utc.timestamp_millis_opt(ms).single();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"[{
        "columns": [["x", 1542412800000, 1542499200000, 1542585600000],
                    ["y0", 37, 20, 32],
                    ["y1", 22, 12, 30]],
        "types": {"y0": "line", "y1": "line", "x": "x"},
        "names": {"y0": "Joined", "y1": "Left"},
        "colors": {"y0": "#3DC23F", "y1": "#F34C44"}
    }]"##;

    #[test]
    fn parses_columnar_json() {
        let sets = load_json(SAMPLE).unwrap();
        assert_eq!(sets.len(), 1);
        let ds = &sets[0];
        assert_eq!(ds.title(), "Chart #1");
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.series()[0].name, "Joined");
        assert_eq!(ds.series()[1].values(), &[22, 12, 30]);
        assert_eq!(ds.series()[0].color, Color::from_rgb(0x3d, 0xc2, 0x3f));
        assert_eq!(ds.dates()[0].format("%Y-%m-%d").to_string(), "2018-11-17");
    }

    #[test]
    fn rejects_ragged_columns() {
        let bad = SAMPLE.replace("[\"y1\", 22, 12, 30]", "[\"y1\", 22, 12]");
        let err = load_json(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("y1"), "{err:#}");
    }

    #[test]
    fn rejects_bad_colors() {
        let bad = SAMPLE.replace("#F34C44", "red");
        assert!(load_json(&bad).is_err());
    }

    #[test]
    fn parses_csv_dates() {
        let want = Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2019-03-01"), Some(want));
        assert_eq!(parse_date(&want.timestamp().to_string()), Some(want));
        assert_eq!(parse_date(&want.timestamp_millis().to_string()), Some(want));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn loads_csv_file() {
        let path = std::env::temp_dir().join("overview_demo_loader.csv");
        std::fs::write(&path, "date,views,likes\n2019-03-01,10,1\n2019-03-02,12,4\n2019-03-03,9,2\n").unwrap();
        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.title(), "overview_demo_loader");
        assert_eq!(ds.series().len(), 2);
        assert_eq!(ds.series_index("likes"), Some(1));
        assert_eq!(ds.series()[0].values(), &[10, 12, 9]);
    }
}
