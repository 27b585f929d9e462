//! Language detection loader
//!
//! One JSON mapping per repository: language name to a record whose
//! `percentage` is the share of source volume the analyzer attributed to
//! that language. Non-application formats are excluded, framework
//! variants fold into their parent language, trace usage below 1% is
//! zeroed, and columns with no surviving usage are pruned.

use crate::error::{PipelineError, PipelineResult};
use crate::scan::{read_json_object, scan_repo_files};
use crate::snapshot::SnapshotSpec;
use indexmap::IndexMap;
use rl_frame::{Frame, FrameBuilder, Value};
use std::path::Path;

const SOURCE_NAME: &str = "languages";

/// Usage below this share (in percent) is treated as not using the language
pub const NOISE_FLOOR: f64 = 1.0;

/// Markup, config, templating, and notebook formats excluded from the
/// language table
pub const EXCLUDED_LANGUAGES: [&str; 38] = [
    "HTML",
    "CSS",
    "Dockerfile",
    "Smarty",
    "Shell",
    "HCL",
    "Makefile",
    "PLpgSQL",
    "PowerShell",
    "Jupyter Notebook",
    "SCSS",
    "Less",
    "TSQL",
    "Mustache",
    "Handlebars",
    "Batchfile",
    "FreeMarker",
    "Gherkin",
    "TeX",
    "JSON",
    "YAML",
    "Procfile",
    "Mako",
    "Inno Setup",
    "MDX",
    "CMake",
    "XSLT",
    "Pug",
    "EJS",
    "Starlark",
    "Thrift",
    "ASL",
    "Sass",
    "Nunjucks",
    "Stylus",
    "Bicep",
    "RAML",
    "Open Policy Agent",
];

/// Framework variants folded into their parent language
pub const LANGUAGE_MERGES: [(&str, &[&str]); 3] = [
    ("JavaScript", &["Vue", "Svelte"]),
    ("Python", &["Cython"]),
    ("C#", &["ASP.NET"]),
];

/// Load the per-repository language percentages
pub fn load_languages(dir: &Path, spec: &SnapshotSpec) -> PipelineResult<Frame> {
    let mut builder = FrameBuilder::new("url");
    for (url, path) in scan_repo_files(dir)? {
        let object = read_json_object(&path)?;
        let mut fields = IndexMap::new();
        for (name, record) in &object {
            let percentage = record
                .get("percentage")
                .and_then(|v| v.as_f64())
                .ok_or_else(|| PipelineError::MissingField {
                    path: path.display().to_string(),
                    entry: name.clone(),
                    field: "percentage",
                })?;
            fields.insert(name.clone(), Value::Float(percentage));
        }
        builder.push(url, fields);
    }
    let mut frame = builder.finish_with_fill(Value::Float(0.0))?;

    frame.drop_columns_if_present(&EXCLUDED_LANGUAGES);
    merge_variants(&mut frame)?;
    apply_noise_floor(&mut frame)?;
    prune_unused(&mut frame);

    if frame.len() != spec.rows {
        return Err(PipelineError::RowCount {
            source_name: SOURCE_NAME,
            expected: spec.rows,
            actual: frame.len(),
        });
    }

    // A column may only survive pruning because values sit exactly at the
    // floor; every retained language must exceed it somewhere.
    for name in frame.column_names() {
        let exceeds = frame
            .column(name)?
            .iter()
            .any(|v| v.as_f64().is_some_and(|p| p > NOISE_FLOOR));
        if !exceeds {
            return Err(PipelineError::NoiseFloorColumn {
                column: name.to_string(),
            });
        }
    }

    Ok(frame)
}

/// Fold framework variant columns into their parent language column
fn merge_variants(frame: &mut Frame) -> PipelineResult<()> {
    for (parent, variants) in LANGUAGE_MERGES {
        for variant in variants {
            if !frame.has_column(variant) {
                continue;
            }
            let addend = frame.column(variant)?.to_vec();
            frame.drop_column(variant)?;

            if !frame.has_column(parent) {
                frame.insert_column(parent, vec![Value::Float(0.0); frame.len()])?;
            }
            let parent_column = frame.column_mut(parent)?;
            for (cell, add) in parent_column.iter_mut().zip(addend) {
                let sum = cell.as_f64().unwrap_or(0.0) + add.as_f64().unwrap_or(0.0);
                *cell = Value::Float(sum);
            }
        }
    }
    Ok(())
}

/// Zero every cell below the noise floor (the column itself stays)
fn apply_noise_floor(frame: &mut Frame) -> PipelineResult<()> {
    let names: Vec<String> = frame.column_names().iter().map(|s| s.to_string()).collect();
    for name in names {
        for cell in frame.column_mut(&name)?.iter_mut() {
            if cell.as_f64().is_some_and(|p| p < NOISE_FLOOR) {
                *cell = Value::Float(0.0);
            }
        }
    }
    Ok(())
}

/// Remove columns with no nonzero usage in any repository
fn prune_unused(frame: &mut Frame) {
    let names: Vec<String> = frame.column_names().iter().map(|s| s.to_string()).collect();
    let unused: Vec<String> = names
        .into_iter()
        .filter(|name| {
            frame
                .column(name)
                .map(|col| !col.iter().any(Value::is_positive))
                .unwrap_or(false)
        })
        .collect();
    let unused_refs: Vec<&str> = unused.iter().map(String::as_str).collect();
    frame.drop_columns_if_present(&unused_refs);
}

#[cfg(test)]
#[path = "languages_test.rs"]
mod tests;
