//! CLI command implementations

pub(crate) mod aggregate;
pub(crate) mod figures;
pub(crate) mod run;
