//! Run command implementation: aggregate, then render

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::commands::{aggregate, figures};

/// Execute the run command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    aggregate::execute(global)?;
    figures::execute(global)
}
