//! Orchestration from input documents to odds.
//!
//! A [`Navigator`] is built once from a falcon document and can then answer any
//! number of empire documents. Each answer builds its own hazard schedule and
//! runs an independent search.

use std::path::Path;

use tracing::{info, warn};

use crate::config::{EmpireConfig, FalconConfig};
use crate::error::{format_suggestions, Result};
use crate::graph::{build_graph, Day, Graph};
use crate::odds::Odds;
use crate::output::{ItineraryReport, OddsReport};
use crate::search::{minimum_captures, plan_itinerary};

/// Ship and routing graph ready to be queried.
#[derive(Debug, Clone)]
pub struct Navigator {
    autonomy: Day,
    departure: String,
    arrival: String,
    graph: Graph,
}

impl Navigator {
    /// Build a navigator from a falcon document on disk.
    pub fn from_path(falcon_path: &Path) -> Result<Self> {
        Self::new(FalconConfig::from_path(falcon_path)?)
    }

    /// Build a navigator from an already parsed falcon document.
    pub fn new(config: FalconConfig) -> Result<Self> {
        let graph = build_graph(&config.all_routes()?)?;
        warn_if_unknown(&graph, "departure", &config.departure);
        warn_if_unknown(&graph, "arrival", &config.arrival);

        Ok(Self {
            autonomy: config.autonomy,
            departure: config.departure,
            arrival: config.arrival,
            graph,
        })
    }

    pub fn autonomy(&self) -> Day {
        self.autonomy
    }

    pub fn departure(&self) -> &str {
        &self.departure
    }

    pub fn arrival(&self) -> &str {
        &self.arrival
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Compute the odds of reaching the arrival for the given empire document.
    pub fn odds(&self, empire: &EmpireConfig) -> Result<OddsReport> {
        let hazards = empire.hazards()?;
        let captures = minimum_captures(
            &self.graph,
            self.autonomy,
            &self.departure,
            &self.arrival,
            empire.countdown,
            &hazards,
        );
        let odds = Odds::from_captures(captures);
        info!(
            departure = %self.departure,
            arrival = %self.arrival,
            countdown = empire.countdown,
            captures = ?captures,
            odds = %odds,
            "computed odds"
        );

        Ok(OddsReport {
            departure: self.departure.clone(),
            arrival: self.arrival.clone(),
            autonomy: self.autonomy,
            countdown: empire.countdown,
            captures,
            odds,
        })
    }

    pub fn odds_from_path(&self, empire_path: &Path) -> Result<OddsReport> {
        self.odds(&EmpireConfig::from_path(empire_path)?)
    }

    /// Compute the odds along with one itinerary that achieves them.
    pub fn itinerary(&self, empire: &EmpireConfig) -> Result<ItineraryReport> {
        let hazards = empire.hazards()?;
        let itinerary = plan_itinerary(
            &self.graph,
            self.autonomy,
            &self.departure,
            &self.arrival,
            empire.countdown,
            &hazards,
        );
        Ok(ItineraryReport::from_itinerary(
            &self.departure,
            &self.arrival,
            empire.countdown,
            itinerary,
        ))
    }

    pub fn itinerary_from_path(&self, empire_path: &Path) -> Result<ItineraryReport> {
        self.itinerary(&EmpireConfig::from_path(empire_path)?)
    }
}

fn warn_if_unknown(graph: &Graph, role: &str, name: &str) {
    if graph.contains(name) {
        return;
    }
    let suggestions = graph.fuzzy_location_matches(name, 3);
    warn!(
        "{role} '{name}' does not appear in any route{}",
        format_suggestions(&suggestions)
    );
}
