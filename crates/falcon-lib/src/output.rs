use serde::Serialize;

use crate::graph::Day;
use crate::odds::Odds;
use crate::search::{Itinerary, ItineraryStep};

/// Structured answer to an odds query that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OddsReport {
    pub departure: String,
    pub arrival: String,
    pub autonomy: Day,
    pub countdown: Day,
    /// Fewest bounty hunters met; `None` when the arrival cannot make the countdown.
    pub captures: Option<u32>,
    pub odds: Odds,
}

impl OddsReport {
    pub fn is_reachable(&self) -> bool {
        self.captures.is_some()
    }
}

/// Odds together with the moves that achieve them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItineraryReport {
    pub departure: String,
    pub arrival: String,
    pub countdown: Day,
    pub captures: Option<u32>,
    pub odds: Odds,
    pub steps: Vec<ItineraryStep>,
}

impl ItineraryReport {
    pub(crate) fn from_itinerary(
        departure: &str,
        arrival: &str,
        countdown: Day,
        itinerary: Option<Itinerary>,
    ) -> Self {
        let captures = itinerary.as_ref().map(|plan| plan.captures);
        Self {
            departure: departure.to_string(),
            arrival: arrival.to_string(),
            countdown,
            captures,
            odds: Odds::from_captures(captures),
            steps: itinerary.map(|plan| plan.steps).unwrap_or_default(),
        }
    }

    /// Number of jumps in the itinerary.
    pub fn jump_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.action == crate::search::Action::Jump)
            .count()
    }
}
