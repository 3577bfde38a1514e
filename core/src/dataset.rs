//! Dataset loading and batch-level helpers.
//!
//! RULE: rows are loaded once as an immutable batch. Only this module
//! performs I/O — the engine itself never touches the filesystem.

use crate::{
    error::{BenchError, BenchResult},
    lever::Lever,
    row::ObservationRow,
};
use std::collections::HashSet;

/// Tolerance for the lever-component consistency check.
const COMPONENT_SUM_TOLERANCE: f64 = 1e-6;

/// Load an observation batch from a JSON array file.
pub fn load_rows(path: &str) -> BenchResult<Vec<ObservationRow>> {
    let content = std::fs::read_to_string(path).map_err(|source| BenchError::DatasetRead {
        path: path.to_string(),
        source,
    })?;
    let rows: Vec<ObservationRow> = serde_json::from_str(&content)?;
    if rows.is_empty() {
        return Err(BenchError::EmptyDataset {
            path: path.to_string(),
        });
    }
    log::info!("loaded {} observation rows from {path}", rows.len());
    Ok(rows)
}

/// Distinct parameter names in first-seen order.
pub fn distinct_parameters(rows: &[ObservationRow]) -> Vec<String> {
    distinct_by(rows, |r| &r.parameter_name)
}

/// Distinct DRG codes in first-seen order.
pub fn distinct_drgs(rows: &[ObservationRow]) -> Vec<String> {
    distinct_by(rows, |r| &r.drg)
}

/// Distinct departments in first-seen order.
pub fn distinct_fachabteilungen(rows: &[ObservationRow]) -> Vec<String> {
    distinct_by(rows, |r| &r.fachabteilung)
}

fn distinct_by<'a, F>(rows: &'a [ObservationRow], key: F) -> Vec<String>
where
    F: Fn(&'a ObservationRow) -> &'a str,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        let value = key(row);
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Warn-only consistency pass: per row, the four lever components
/// should sum to the net potential. Input is trusted upstream data, so
/// a mismatch is logged rather than fatal. Returns the number of
/// flagged rows.
pub fn validate_rows(rows: &[ObservationRow]) -> usize {
    let mut flagged = 0;
    for (index, row) in rows.iter().enumerate() {
        let component_sum: f64 = Lever::ALL.iter().map(|l| l.potential(row)).sum();
        if (component_sum - row.hauptpot_net_analysen).abs() > COMPONENT_SUM_TOLERANCE {
            log::warn!(
                "row {index} ({} / {} / {}): lever components sum to {:.4}, net potential is {:.4}",
                row.parameter_name,
                row.drg,
                row.fachabteilung,
                component_sum,
                row.hauptpot_net_analysen,
            );
            flagged += 1;
        }
    }
    flagged
}
