//! Dataset access for the figure stage
//!
//! Wraps the aggregated CSV with the one derived field every figure
//! needs: the repository creation year.

use crate::error::{FigureError, FigureResult};
use chrono::Datelike;
use rl_frame::{csv_io, Frame, Value};
use std::path::Path;

/// The aggregated dataset plus per-row creation years
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: Frame,
    years: Vec<i32>,
}

impl Dataset {
    /// Read the dataset CSV and parse the creation year per row
    pub fn load(path: &Path) -> FigureResult<Self> {
        Self::from_frame(csv_io::read_file_positional(path)?)
    }

    /// Wrap an already loaded dataset table
    pub fn from_frame(frame: Frame) -> FigureResult<Self> {
        let years = frame
            .column("created_at")?
            .iter()
            .map(|value| {
                let text = value.as_str().ok_or_else(|| FigureError::Timestamp {
                    value: value.to_string(),
                })?;
                chrono::DateTime::parse_from_rfc3339(text)
                    .map(|stamp| stamp.year())
                    .map_err(|_| FigureError::Timestamp {
                        value: text.to_string(),
                    })
            })
            .collect::<FigureResult<Vec<i32>>>()?;
        Ok(Self { frame, years })
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Creation year per row, parallel to every column
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Per-row "value > 0" mask for one column
    pub fn positive(&self, column: &str) -> FigureResult<Vec<bool>> {
        Ok(self
            .frame
            .column(column)?
            .iter()
            .map(Value::is_positive)
            .collect())
    }

    /// Per-row numeric view of one column (non-numeric cells become 0)
    pub fn numeric(&self, column: &str) -> FigureResult<Vec<f64>> {
        Ok(self
            .frame
            .column(column)?
            .iter()
            .map(|value| value.as_f64().unwrap_or(0.0))
            .collect())
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
