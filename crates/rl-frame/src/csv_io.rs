//! CSV reading and writing for frames
//!
//! Writing never persists the row key (the dataset file carries no index
//! column); reading therefore assigns positional keys and infers cell
//! types from the text.

use crate::error::{FrameError, FrameResult};
use crate::frame::Frame;
use crate::value::Value;
use indexmap::IndexMap;
use std::io::Write;
use std::path::Path;

/// Write the frame as headered CSV, columns in stored order, no key column
pub fn write_file(frame: &Frame, path: &Path) -> FrameResult<()> {
    let file = std::fs::File::create(path).map_err(|e| FrameError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    write_to(frame, file)
}

/// Write the frame as headered CSV to any writer
pub fn write_to<W: Write>(frame: &Frame, writer: W) -> FrameResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    let names = frame.column_names();
    out.write_record(&names)?;

    let columns: Vec<&[Value]> = names
        .iter()
        .map(|&name| frame.column(name).expect("name from column_names"))
        .collect();

    for row in 0..frame.len() {
        let record: Vec<String> = columns.iter().map(|col| col[row].to_string()).collect();
        out.write_record(&record)?;
    }
    out.flush().map_err(|e| FrameError::IoWithPath {
        path: "<writer>".to_string(),
        source: e,
    })?;
    Ok(())
}

/// Read a headered CSV into a frame with positional row keys ("0", "1", ...)
pub fn read_file_positional(path: &Path) -> FrameResult<Frame> {
    let file = std::fs::File::open(path).map_err(|e| FrameError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    read_positional(file)
}

/// Read headered CSV from any reader, assigning positional row keys
pub fn read_positional<R: std::io::Read>(reader: R) -> FrameResult<Frame> {
    let mut input = csv::Reader::from_reader(reader);
    let headers: Vec<String> = input
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: IndexMap<String, Vec<Value>> = headers
        .iter()
        .map(|h| (h.clone(), Vec::new()))
        .collect();
    let mut keys = Vec::new();

    for (row_idx, record) in input.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            return Err(FrameError::CsvRow {
                row: row_idx,
                message: format!(
                    "expected {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }
        for (header, field) in headers.iter().zip(record.iter()) {
            columns
                .get_mut(header)
                .expect("header column pre-inserted")
                .push(infer_value(field));
        }
        keys.push(row_idx.to_string());
    }

    Frame::from_columns("row", keys, columns)
}

/// Type inference for one CSV cell: empty, bool, int, float, then string
fn infer_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    match field {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(v) = field.parse::<i64>() {
        return Value::Int(v);
    }
    if let Ok(v) = field.parse::<f64>() {
        return Value::Float(v);
    }
    Value::Str(field.to_string())
}

#[cfg(test)]
#[path = "csv_io_test.rs"]
mod tests;
