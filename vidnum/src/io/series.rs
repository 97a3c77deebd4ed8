use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::model::convergence::ConvergenceSeries;

#[derive(Debug, Serialize, Deserialize)]
struct SeriesRow {
    m: usize,
    term_norm: f64,
    partial_norm: f64,
}

/// Write a convergence series as CSV with columns `m,term_norm,partial_norm`.
pub fn write_convergence_csv(path: impl AsRef<Path>, series: &ConvergenceSeries) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir failed (path={:?})", parent))?;
    }

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create series CSV: {:?}", path))?;
    for (idx, (term, partial)) in series.term_norms.iter().zip(&series.partial_norms).enumerate() {
        wtr.serialize(SeriesRow {
            m: idx + 1,
            term_norm: *term,
            partial_norm: *partial,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a series written by [`write_convergence_csv`]. Rows must be numbered
/// 1, 2, 3, ... in order.
pub fn read_convergence_csv(path: impl AsRef<Path>) -> anyhow::Result<ConvergenceSeries> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open series CSV: {:?}", path))?;

    let mut series = ConvergenceSeries::default();
    for (idx, result) in rdr.deserialize::<SeriesRow>().enumerate() {
        let row = result?;
        anyhow::ensure!(row.m == idx + 1, "series row {} out of order (m={})", idx + 1, row.m);
        series.term_norms.push(row.term_norm);
        series.partial_norms.push(row.partial_norm);
    }
    Ok(series)
}
