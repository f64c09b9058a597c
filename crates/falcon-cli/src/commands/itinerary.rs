//! Itinerary command handler.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use falcon_cli::output::{render_itinerary, OutputFormat};
use falcon_cli::terminal::ColorPalette;

use super::load_documents;

/// Handle the itinerary subcommand.
///
/// Prints one sequence of moves achieving the best odds, followed by the odds.
pub fn handle_itinerary_command(falcon: &Path, empire: &Path, format: OutputFormat) -> Result<()> {
    let (navigator, empire_config) = load_documents(falcon, empire)?;
    let report = navigator
        .itinerary(&empire_config)
        .with_context(|| format!("invalid bounty hunters in {}", empire.display()))?;
    let rendered = render_itinerary(&report, format, ColorPalette::detect())?;

    io::stdout()
        .write_all(rendered.as_bytes())
        .context("failed to write itinerary")?;
    Ok(())
}
