//! Odds command handler.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use falcon_cli::output::{render_odds, OutputFormat};

use super::load_documents;

/// Handle the odds subcommand.
///
/// Prints the probability of reaching the arrival before the countdown ends.
pub fn handle_odds_command(falcon: &Path, empire: &Path, format: OutputFormat) -> Result<()> {
    let (navigator, empire_config) = load_documents(falcon, empire)?;
    debug!(
        locations = navigator.graph().location_count(),
        "answering odds query"
    );

    let report = navigator
        .odds(&empire_config)
        .with_context(|| format!("invalid bounty hunters in {}", empire.display()))?;
    let rendered = render_odds(&report, format)?;

    io::stdout()
        .write_all(rendered.as_bytes())
        .context("failed to write odds")?;
    Ok(())
}
