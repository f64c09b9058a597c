//! falcon library entry points.
//!
//! This crate loads the falcon and empire documents, builds the routing graph
//! and hazard schedule, and runs the minimum-capture search that turns them
//! into odds of arrival. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod hazard;
pub mod mission;
pub mod odds;
pub mod output;
pub mod search;

pub use config::{load_routes_db, EmpireConfig, FalconConfig, DEFAULT_ARRIVAL, DEFAULT_DEPARTURE};
pub use error::{Error, Result};
pub use graph::{build_graph, Day, Edge, Graph, LocationId, Route};
pub use hazard::{BountyHunter, HazardSchedule};
pub use mission::Navigator;
pub use odds::{Odds, CAPTURE_SURVIVAL_RATE};
pub use output::{ItineraryReport, OddsReport};
pub use search::{
    minimum_captures, plan_itinerary, Action, Itinerary, ItineraryStep, SearchState,
};
