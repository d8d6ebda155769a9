//! Polygon inputs for `polysect check`.
//!
//! Formats
//! - Inline: `"x,y,z; x,y,z; ..."`; `x,y` entries get `z = 0`.
//! - JSON: `{"a": [[x,y,z], ...], "b": [[x,y], ...]}`.
//! - CSV: columns `poly,x,y` plus optional `z`; rows are grouped by `poly` and
//!   the first two distinct ids (in row order) become A and B. Ids may be
//!   numbers or names.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use polars::prelude::*;
use serde::Deserialize;

pub type Points3 = Vec<Vector3<f64>>;

#[derive(Debug, Deserialize)]
struct PairFile {
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
}

fn to_point(coords: &[f64]) -> Result<Vector3<f64>> {
    match *coords {
        [x, y] => Ok(Vector3::new(x, y, 0.0)),
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => bail!("expected 2 or 3 coordinates, got {}", coords.len()),
    }
}

/// Parse `"x,y[,z]; x,y[,z]; ..."`. Empty entries (e.g. a trailing `;`) are skipped.
pub fn parse_inline(spec: &str) -> Result<Points3> {
    spec.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(i, entry)| {
            let coords = entry
                .split(',')
                .map(|c| c.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("point {i}: '{entry}' is not a number list"))?;
            to_point(&coords).with_context(|| format!("point {i}: '{entry}'"))
        })
        .collect()
}

/// Read a polygon pair from a `.json` or `.csv` file.
pub fn read_pair(path: &Path) -> Result<(Points3, Points3)> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => bail!(
            "unsupported input {}: expected a .json or .csv file",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<(Points3, Points3)> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pair: PairFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing {} as {{\"a\": [...], \"b\": [...]}}", path.display()))?;
    let convert = |name: &str, pts: &[Vec<f64>]| -> Result<Points3> {
        pts.iter()
            .enumerate()
            .map(|(i, p)| to_point(p).with_context(|| format!("polygon {name}, point {i}")))
            .collect()
    };
    Ok((convert("a", &pair.a)?, convert("b", &pair.b)?))
}

fn read_csv(path: &Path) -> Result<(Points3, Points3)> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let ids = df
        .column("poly")
        .context("csv input needs a 'poly' column")?
        .cast(&DataType::String)?;
    let xs = df
        .column("x")
        .context("csv input needs an 'x' column")?
        .cast(&DataType::Float64)?;
    let ys = df
        .column("y")
        .context("csv input needs a 'y' column")?
        .cast(&DataType::Float64)?;
    let zs: Vec<Option<f64>> = match df.column("z") {
        Ok(z) => z.cast(&DataType::Float64)?.f64()?.into_iter().collect(),
        Err(_) => vec![Some(0.0); df.height()],
    };

    let mut order: Vec<String> = Vec::with_capacity(2);
    let mut groups: [Points3; 2] = [Vec::new(), Vec::new()];
    let rows = ids
        .str()?
        .into_iter()
        .zip(xs.f64()?.into_iter())
        .zip(ys.f64()?.into_iter())
        .zip(zs);
    for (row, (((id, x), y), z)) in rows.enumerate() {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            bail!("csv row {row}: missing 'poly' id");
        };
        let (Some(x), Some(y), Some(z)) = (x, y, z) else {
            bail!("csv row {row} (poly {id}): missing or non-numeric coordinate");
        };
        let slot = match order.iter().position(|known| known == id) {
            Some(slot) => slot,
            None if order.len() < 2 => {
                order.push(id.to_string());
                order.len() - 1
            }
            None => {
                tracing::warn!(row, poly = id, "ignoring rows beyond the first two polygons");
                continue;
            }
        };
        groups[slot].push(Vector3::new(x, y, z));
    }
    if order.len() < 2 {
        bail!(
            "csv input {} holds {} polygon id(s); need two",
            path.display(),
            order.len()
        );
    }
    let [a, b] = groups;
    Ok((a, b))
}
