//! Output formatting for odds and itinerary reports.
//!
//! Renderers return the text instead of printing it so the command handlers
//! decide where it goes and the formats stay testable.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;

use falcon_lib::{Action, ItineraryReport, ItineraryStep, OddsReport};

use crate::terminal::ColorPalette;

/// Presentation style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Only the probability, three decimals.
    Basic,
    /// Human-friendly summary.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Render an odds report in the requested format.
pub fn render_odds(report: &OddsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Basic => Ok(format!("{}\n", report.odds)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(
                out,
                "Odds of reaching {} from {} within {} days: {} ({:.1}%)",
                report.arrival,
                report.departure,
                report.countdown,
                report.odds,
                report.odds.percentage()
            )?;
            match report.captures {
                Some(captures) => writeln!(
                    out,
                    "Minimum bounty hunter encounters: {captures} (autonomy {})",
                    report.autonomy
                )?,
                None => writeln!(out, "No route reaches {} in time.", report.arrival)?,
            }
            Ok(out)
        }
    }
}

/// Render an itinerary report in the requested format.
pub fn render_itinerary(
    report: &ItineraryReport,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    match format {
        OutputFormat::Basic => {
            let mut out = String::new();
            for step in &report.steps {
                writeln!(out, "{} {} {}", step.day, action_label(step.action), step.location)?;
            }
            writeln!(out, "{}", report.odds)?;
            Ok(out)
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
        OutputFormat::Text => render_itinerary_text(report, palette),
    }
}

fn render_itinerary_text(report: &ItineraryReport, palette: ColorPalette) -> Result<String> {
    let mut out = String::new();
    let Some(captures) = report.captures else {
        writeln!(
            out,
            "{}No itinerary reaches {} from {} within {} days.{}",
            palette.red, report.arrival, report.departure, report.countdown, palette.reset
        )?;
        writeln!(out, "\nOdds: {}", report.odds)?;
        return Ok(out);
    };

    writeln!(
        out,
        "Itinerary from {} to {} ({} jumps; {} captures; countdown {}):",
        report.departure,
        report.arrival,
        report.jump_count(),
        captures,
        report.countdown
    )?;
    for step in &report.steps {
        render_step(&mut out, step, palette)?;
    }

    let odds_color = if captures == 0 {
        palette.green
    } else {
        palette.reset
    };
    writeln!(
        out,
        "\nOdds: {odds_color}{}{} ({:.1}%)",
        report.odds,
        palette.reset,
        report.odds.percentage()
    )?;
    Ok(out)
}

fn render_step(out: &mut String, step: &ItineraryStep, palette: ColorPalette) -> Result<()> {
    let tag = match step.action {
        Action::Depart => palette.tag_depart,
        Action::Wait => palette.tag_wait,
        Action::Refuel => palette.tag_refuel,
        Action::Jump => palette.tag_jump,
    };
    write!(
        out,
        "  {gray}day {day:>3}{reset}  {tag}{label:<6}{reset} {bold}{location}{reset} {gray}(fuel {fuel}){reset}",
        gray = palette.gray,
        day = step.day,
        reset = palette.reset,
        tag = tag,
        label = action_label(step.action),
        bold = palette.white_bold,
        location = step.location,
        fuel = step.fuel,
    )?;
    if step.hazard {
        write!(out, " {}bounty hunters!{}", palette.red, palette.reset)?;
    }
    writeln!(out)?;
    Ok(())
}

fn action_label(action: Action) -> &'static str {
    match action {
        Action::Depart => "DEPART",
        Action::Wait => "WAIT",
        Action::Refuel => "REFUEL",
        Action::Jump => "JUMP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{itinerary_report, odds_report};

    #[test]
    fn basic_odds_is_just_the_probability() {
        let rendered = render_odds(&odds_report(Some(2)), OutputFormat::Basic).unwrap();
        assert_eq!(rendered, "0.810\n");
    }

    #[test]
    fn text_odds_mentions_captures() {
        let rendered = render_odds(&odds_report(Some(1)), OutputFormat::Text).unwrap();
        assert!(rendered.contains("Odds of reaching Endor from Tatooine within 9 days: 0.900"));
        assert!(rendered.contains("Minimum bounty hunter encounters: 1"));
    }

    #[test]
    fn text_odds_reports_unreachable_arrival() {
        let rendered = render_odds(&odds_report(None), OutputFormat::Text).unwrap();
        assert!(rendered.contains("0.000"));
        assert!(rendered.contains("No route reaches Endor in time."));
    }

    #[test]
    fn json_odds_serialises_null_captures() {
        let rendered = render_odds(&odds_report(None), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["captures"].is_null());
        assert_eq!(value["odds"], 0.0);
    }

    #[test]
    fn text_itinerary_flags_hazards() {
        let rendered =
            render_itinerary(&itinerary_report(), OutputFormat::Text, ColorPalette::plain())
                .unwrap();
        assert!(rendered.contains("Itinerary from Tatooine to Endor (2 jumps; 1 captures"));
        assert!(rendered.contains("REFUEL Hoth (fuel 6) bounty hunters!"));
        assert!(rendered.contains("Odds: 0.900 (90.0%)"));
    }

    #[test]
    fn basic_itinerary_lists_one_line_per_step() {
        let rendered =
            render_itinerary(&itinerary_report(), OutputFormat::Basic, ColorPalette::plain())
                .unwrap();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0 DEPART Tatooine",
                "6 JUMP Hoth",
                "7 REFUEL Hoth",
                "8 JUMP Endor",
                "0.900"
            ]
        );
    }
}
