//! Technology detection loader
//!
//! One JSON mapping per repository: technology name to a detection
//! record whose `total_count` is the number of matches found by the
//! static scanner. A technology absent from a file counts as zero.

use crate::categories::DATASTORE_TECHNOLOGIES;
use crate::error::{PipelineError, PipelineResult};
use crate::scan::{read_json_object, scan_repo_files, total_count};
use crate::snapshot::SnapshotSpec;
use indexmap::IndexMap;
use rl_frame::{Frame, FrameBuilder, Value};
use std::path::Path;

const SOURCE_NAME: &str = "technologies";

/// Load the per-repository technology counts
pub fn load_technologies(dir: &Path, spec: &SnapshotSpec) -> PipelineResult<Frame> {
    let mut builder = FrameBuilder::new("url");
    for (url, path) in scan_repo_files(dir)? {
        let object = read_json_object(&path)?;
        let mut fields = IndexMap::new();
        for (name, record) in &object {
            fields.insert(name.clone(), Value::Int(total_count(&path, name, record)?));
        }

        // A repository already attributed to a named engine must not be
        // counted again under the generic Database catch-all.
        let named_engine = DATASTORE_TECHNOLOGIES
            .iter()
            .any(|engine| fields.get(*engine).is_some_and(Value::is_positive));
        if named_engine {
            fields.insert("Database".to_string(), Value::Int(0));
        }

        log::debug!("technologies: {} entries for {}", object.len(), url);
        builder.push(url, fields);
    }

    let frame = builder.finish_with_fill(Value::Int(0))?;
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
#[path = "technologies_test.rs"]
mod tests;
