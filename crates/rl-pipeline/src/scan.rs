//! Per-repository file discovery
//!
//! The three detection directories hold one JSON file per repository,
//! named `{owner}---{repo}.json`. The first `---` maps back to the `/`
//! of the repository path, which recovers the canonical URL.

use crate::error::{PipelineError, PipelineResult};
use crate::paths::GITHUB_URL_BASE;
use std::path::{Path, PathBuf};

/// Recover the canonical repository URL from a detection file name
pub fn url_from_file_name(path: &Path) -> PipelineResult<String> {
    let bad = || PipelineError::BadFileName {
        path: path.display().to_string(),
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(bad)?;
    let stem = name.strip_suffix(".json").ok_or_else(bad)?;

    let (owner, repo) = stem.split_once("---").ok_or_else(bad)?;
    if owner.is_empty() || repo.is_empty() {
        return Err(bad());
    }
    Ok(format!("{GITHUB_URL_BASE}{owner}/{repo}"))
}

/// List every `.json` file in `dir` with its recovered repository URL,
/// sorted by URL. Non-JSON entries and subdirectories are ignored.
pub fn scan_repo_files(dir: &Path) -> PipelineResult<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PipelineError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PipelineError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "json") {
            let url = url_from_file_name(&path)?;
            files.push((url, path));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Parse a per-repository file as a JSON mapping
pub fn read_json_object(
    path: &Path,
) -> PipelineResult<serde_json::Map<String, serde_json::Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| PipelineError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| PipelineError::Json {
            path: path.display().to_string(),
            source: e,
        })?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(PipelineError::NotAMapping {
            path: path.display().to_string(),
        }),
    }
}

/// Extract the `total_count` field of one detection record
pub(crate) fn total_count(
    path: &Path,
    entry: &str,
    value: &serde_json::Value,
) -> PipelineResult<i64> {
    value
        .get("total_count")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| PipelineError::MissingField {
            path: path.display().to_string(),
            entry: entry.to_string(),
            field: "total_count",
        })
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
