//! Repository metadata loader
//!
//! One JSON array of GitHub search-API repository records, keyed by
//! `html_url`. The API flag names are renamed to the dataset's column
//! names; everything else passes through. Row-count enforcement happens
//! at join time, matching the original pipeline.

use crate::error::{PipelineError, PipelineResult};
use indexmap::IndexMap;
use rl_frame::{Frame, FrameBuilder, Value};
use serde::Deserialize;
use std::path::Path;

/// License object as the GitHub API returns it
#[derive(Debug, Deserialize)]
struct LicenseRecord {
    name: String,
}

/// The subset of a GitHub search-API repository record the dataset keeps
#[derive(Debug, Deserialize)]
struct RepoRecord {
    id: i64,
    html_url: String,
    created_at: String,
    updated_at: String,
    size: i64,
    language: Option<String>,
    has_wiki: bool,
    license: Option<LicenseRecord>,
    is_template: bool,
    fork: bool,
    forks: i64,
    watchers: i64,
    archived: bool,
}

/// Load the repository metadata table
pub fn load_metadata(path: &Path) -> PipelineResult<Frame> {
    let content = std::fs::read_to_string(path).map_err(|e| PipelineError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    let records: Vec<RepoRecord> =
        serde_json::from_str(&content).map_err(|e| PipelineError::Json {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut builder = FrameBuilder::new("url");
    for record in records {
        let mut fields = IndexMap::new();
        fields.insert("id".to_string(), Value::Int(record.id));
        fields.insert("created_at".to_string(), Value::from(record.created_at));
        fields.insert("updated_at".to_string(), Value::from(record.updated_at));
        fields.insert("size".to_string(), Value::Int(record.size));
        fields.insert("language".to_string(), Value::from(record.language));
        fields.insert("has_wiki".to_string(), Value::Bool(record.has_wiki));
        fields.insert(
            "license".to_string(),
            Value::from(record.license.map(|l| l.name)),
        );
        fields.insert("is_template".to_string(), Value::Bool(record.is_template));
        fields.insert("is_fork".to_string(), Value::Bool(record.fork));
        fields.insert("num_forks".to_string(), Value::Int(record.forks));
        fields.insert("num_watchers".to_string(), Value::Int(record.watchers));
        fields.insert("is_archived".to_string(), Value::Bool(record.archived));
        builder.push(record.html_url, fields);
    }

    Ok(builder.finish()?)
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod tests;
