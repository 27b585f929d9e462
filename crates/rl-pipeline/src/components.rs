//! Component count loader
//!
//! Reads the headerless three-column CSV (url, num_ms, num_sup_comp),
//! derives the total, and asserts the snapshot bounds before anything
//! else gets to run.

use crate::error::{PipelineError, PipelineResult};
use crate::snapshot::SnapshotSpec;
use indexmap::IndexMap;
use rl_frame::{Frame, FrameBuilder, Value};
use std::path::Path;

const SOURCE_NAME: &str = "component counts";

/// Load and validate the per-repository component counts
pub fn load_components(path: &Path, spec: &SnapshotSpec) -> PipelineResult<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut builder = FrameBuilder::new("url");
    for record in reader.records() {
        let record = record?;
        let url = field(&record, 0, "url")?;
        let num_ms = parse_count(&url, field(&record, 1, "num_ms")?, "num_ms")?;
        let num_sup_comp =
            parse_count(&url, field(&record, 2, "num_sup_comp")?, "num_sup_comp")?;

        let mut fields = IndexMap::new();
        fields.insert("num_ms".to_string(), Value::Int(num_ms));
        fields.insert("num_sup_comp".to_string(), Value::Int(num_sup_comp));
        fields.insert(
            "num_total_comp".to_string(),
            Value::Int(num_ms + num_sup_comp),
        );
        builder.push(url, fields);
    }
    let frame = builder.finish()?;

    check_min_positive(&frame, "num_ms")?;
    check_min_positive(&frame, "num_total_comp")?;
    check_exact_max(&frame, "num_total_comp", spec.max_total)?;
    check_exact_max(&frame, "num_sup_comp", spec.max_supporting)?;
    check_exact_max(&frame, "num_ms", spec.max_microservices)?;

    if frame.len() != spec.rows {
        return Err(PipelineError::RowCount {
            source_name: SOURCE_NAME,
            expected: spec.rows,
            actual: frame.len(),
        });
    }

    for name in frame.column_names() {
        let column = frame.column(name)?;
        for (idx, value) in column.iter().enumerate() {
            if value.is_null() {
                return Err(PipelineError::MissingValue {
                    column: name.to_string(),
                    url: frame.keys()[idx].clone(),
                });
            }
        }
    }

    Ok(frame)
}

fn field(record: &csv::StringRecord, idx: usize, column: &'static str) -> PipelineResult<String> {
    let value = record.get(idx).unwrap_or("").trim();
    if value.is_empty() {
        return Err(PipelineError::MissingValue {
            column: column.to_string(),
            url: record.get(0).unwrap_or("<unknown>").to_string(),
        });
    }
    Ok(value.to_string())
}

fn parse_count(url: &str, raw: String, column: &'static str) -> PipelineResult<i64> {
    raw.parse::<i64>().map_err(|_| PipelineError::MissingValue {
        column: column.to_string(),
        url: url.to_string(),
    })
}

fn check_min_positive(frame: &Frame, column: &'static str) -> PipelineResult<()> {
    for (idx, value) in frame.column(column)?.iter().enumerate() {
        if !value.is_positive() {
            return Err(PipelineError::NonPositiveCount {
                column,
                url: frame.keys()[idx].clone(),
            });
        }
    }
    Ok(())
}

fn check_exact_max(frame: &Frame, column: &'static str, expected: i64) -> PipelineResult<()> {
    let actual = frame
        .column(column)?
        .iter()
        .filter_map(|v| v.as_i64())
        .max()
        .unwrap_or(0);
    if actual != expected {
        return Err(PipelineError::UnexpectedMaximum {
            column,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "components_test.rs"]
mod tests;
