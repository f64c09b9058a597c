// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod itinerary;
pub mod odds;

use std::path::Path;

use anyhow::{Context, Result};

use falcon_lib::{EmpireConfig, Navigator};

/// Load both documents, attaching the offending path to any error.
pub fn load_documents(falcon: &Path, empire: &Path) -> Result<(Navigator, EmpireConfig)> {
    let navigator = Navigator::from_path(falcon)
        .with_context(|| format!("failed to load falcon document from {}", falcon.display()))?;
    let empire_config = EmpireConfig::from_path(empire)
        .with_context(|| format!("failed to load empire document from {}", empire.display()))?;
    Ok((navigator, empire_config))
}
