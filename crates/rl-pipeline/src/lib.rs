//! rl-pipeline - Aggregation stage for Repolens
//!
//! Loads the five per-repository data sources (component counts, GitHub
//! API metadata, detected languages, detected technologies, and
//! containerization signals), validates each against the dataset snapshot
//! invariants, joins them one-to-one on the repository URL, derives the
//! technology-category indicator columns, and writes the flat dataset CSV.
//!
//! Every validation failure is fatal and immediate; there is no partial
//! output and no skip-and-continue.

pub mod aggregate;
pub mod categories;
pub mod components;
pub mod containerization;
pub mod error;
pub mod languages;
pub mod metadata;
pub mod paths;
pub mod scan;
pub mod snapshot;
pub mod technologies;

pub use aggregate::{build_dataset, AggregateReport};
pub use error::{PipelineError, PipelineResult};
pub use paths::DataPaths;
pub use snapshot::SnapshotSpec;
