//! Containerization signal loader
//!
//! Each repository file maps the three marker names (Dockerfile,
//! DockerCompose, Kubernetes) to detection records; the loader reduces
//! them to three booleans. Unlike the technology files, all three
//! markers are mandatory.

use crate::error::{PipelineError, PipelineResult};
use crate::scan::{read_json_object, scan_repo_files, total_count};
use crate::snapshot::SnapshotSpec;
use indexmap::IndexMap;
use rl_frame::{Frame, FrameBuilder, Value};
use std::path::Path;

const SOURCE_NAME: &str = "containerization";

/// Marker key in the detection file and the dataset column it becomes
const MARKERS: [(&str, &str); 3] = [
    ("Dockerfile", "docker"),
    ("DockerCompose", "compose"),
    ("Kubernetes", "kubernetes"),
];

/// Load the per-repository containerization flags
pub fn load_containerization(dir: &Path, spec: &SnapshotSpec) -> PipelineResult<Frame> {
    let mut builder = FrameBuilder::new("url");
    for (url, path) in scan_repo_files(dir)? {
        let object = read_json_object(&path)?;
        let mut fields = IndexMap::new();
        for (marker, column) in MARKERS {
            let record = object.get(marker).ok_or(PipelineError::MissingMarker {
                path: path.display().to_string(),
                marker,
            })?;
            let count = total_count(&path, marker, record)?;
            fields.insert(column.to_string(), Value::Bool(count > 0));
        }
        builder.push(url, fields);
    }

    let frame = builder.finish()?;
    if frame.len() != spec.rows {
        return Err(PipelineError::RowCount {
            source_name: SOURCE_NAME,
            expected: spec.rows,
            actual: frame.len(),
        });
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "containerization_test.rs"]
mod tests;
