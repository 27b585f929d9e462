//! Fixed data locations
//!
//! All inputs and outputs live at constant paths below a single data
//! root; the root itself is the only configurable location.

use std::path::{Path, PathBuf};

/// Prefix recovered repository names are resolved against
pub const GITHUB_URL_BASE: &str = "https://github.com/";

const COMPONENT_COUNTS_FILE: &str = "raw_data/application_components.csv";
const METADATA_FILE: &str = "raw_data/applications/automatic_filtering.json";
const TECHNOLOGIES_DIR: &str = "raw_data/technologies";
const LANGUAGES_DIR: &str = "raw_data/languages";
const CONTAINERIZATION_DIR: &str = "raw_data/containerization";
const DATASET_DIR: &str = "datasets";
const DATASET_FILE: &str = "datasets/application_dataset.csv";
const FIGURES_DIR: &str = "figures";

/// Resolves the fixed data layout against a chosen root directory
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Headerless CSV of per-repository component counts
    pub fn component_counts(&self) -> PathBuf {
        self.root.join(COMPONENT_COUNTS_FILE)
    }

    /// JSON array of GitHub API repository records
    pub fn metadata(&self) -> PathBuf {
        self.root.join(METADATA_FILE)
    }

    /// Directory of per-repository technology detection files
    pub fn technologies(&self) -> PathBuf {
        self.root.join(TECHNOLOGIES_DIR)
    }

    /// Directory of per-repository language detection files
    pub fn languages(&self) -> PathBuf {
        self.root.join(LANGUAGES_DIR)
    }

    /// Directory of per-repository containerization marker files
    pub fn containerization(&self) -> PathBuf {
        self.root.join(CONTAINERIZATION_DIR)
    }

    pub fn dataset_dir(&self) -> PathBuf {
        self.root.join(DATASET_DIR)
    }

    /// The aggregated dataset CSV, regenerated on every run
    pub fn dataset(&self) -> PathBuf {
        self.root.join(DATASET_FILE)
    }

    /// Output directory for rendered figures
    pub fn figures_dir(&self) -> PathBuf {
        self.root.join(FIGURES_DIR)
    }
}
