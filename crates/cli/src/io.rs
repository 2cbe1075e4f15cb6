//! Point files in, hull files out.
//!
//! Inputs
//! - `.json`: `{"points": [{"x": 1, "y": 2}, ...]}`; `"points": null` (or a
//!   missing key) means no collection was supplied.
//! - `.csv` / `.parquet`: integer columns `x` and `y`, read through polars.
//!
//! Outputs are pretty-printed JSON; parent directories are created.

use anyhow::{bail, Context, Result};
use giftwrap::{ring, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Point collection document (input of `hull`, output of `sample`).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PointsDoc {
    #[serde(default)]
    pub points: Option<Vec<Point>>,
}

/// Hull document written by `hull`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HullDoc {
    pub hull: Vec<Point>,
    pub closed: bool,
    pub vertices: usize,
    pub twice_area: i128,
}

impl HullDoc {
    pub fn new(hull: Vec<Point>) -> Self {
        Self {
            closed: ring::is_closed(&hull),
            vertices: ring::vertices(&hull).len(),
            twice_area: ring::twice_signed_area(&hull),
            hull,
        }
    }
}

/// Read a point file; `Ok(None)` when a JSON document carries no collection.
pub fn read_points(path: &Path) -> Result<Option<Vec<Point>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let doc: PointsDoc = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(doc.points)
        }
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf, path).map(Some)
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf, path).map(Some)
        }
        _ => bail!(
            "unsupported input format (want .json, .csv or .parquet): {}",
            path.display()
        ),
    }
}

fn read_table(lf: LazyFrame, path: &Path) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Int32),
            col("y").cast(DataType::Int32),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    let xs = df.column("x")?.i32()?;
    let ys = df.column("y")?.i32()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row}: missing or out-of-range coordinate"),
        })
        .collect()
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
