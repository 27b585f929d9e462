//! Dataset snapshot invariants
//!
//! The row count and component maxima are facts about the current dataset
//! snapshot, not algorithmic bounds. They are asserted exactly so that
//! any drift in the upstream collection tooling fails the run instead of
//! silently changing the dataset.

/// Known invariants of one dataset snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSpec {
    /// Exact number of repositories in every source
    pub rows: usize,
    /// Exact maximum of the microservice count column
    pub max_microservices: i64,
    /// Exact maximum of the supporting-component count column
    pub max_supporting: i64,
    /// Exact maximum of the total component count column
    pub max_total: i64,
}

impl SnapshotSpec {
    /// The current dataset snapshot
    pub const CURRENT: SnapshotSpec = SnapshotSpec {
        rows: 553,
        max_microservices: 14,
        max_supporting: 21,
        max_total: 33,
    };
}

impl Default for SnapshotSpec {
    fn default() -> Self {
        Self::CURRENT
    }
}
