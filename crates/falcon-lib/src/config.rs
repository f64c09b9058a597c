//! Loaders for the two input documents.
//!
//! The falcon document describes the ship (autonomy, departure, arrival) and
//! the routes it may fly, either inline or in a SQLite `ROUTES` table. The
//! empire document gives the countdown and where bounty hunters wait.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Day, Route};
use crate::hazard::{BountyHunter, HazardSchedule};

pub const DEFAULT_DEPARTURE: &str = "Tatooine";
pub const DEFAULT_ARRIVAL: &str = "Endor";

const ROUTES_QUERY: &str = "SELECT ORIGIN, DESTINATION, TRAVEL_TIME FROM ROUTES";

fn default_departure() -> String {
    DEFAULT_DEPARTURE.to_string()
}

fn default_arrival() -> String {
    DEFAULT_ARRIVAL.to_string()
}

/// Ship capabilities and the routes available to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FalconConfig {
    /// Days of travel on a full tank.
    pub autonomy: Day,
    #[serde(default = "default_departure")]
    pub departure: String,
    #[serde(default = "default_arrival")]
    pub arrival: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    /// SQLite database holding additional routes. Relative paths are resolved
    /// against the directory of the document that named them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes_db: Option<PathBuf>,
}

impl FalconConfig {
    /// Load and validate a falcon document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut config = Self::from_json(&text, path)?;
        if let Some(db) = config.routes_db.as_mut() {
            if db.is_relative() {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                *db = base.join(&*db);
            }
        }
        debug!(
            path = %path.display(),
            autonomy = config.autonomy,
            inline_routes = config.routes.len(),
            "loaded falcon document"
        );
        Ok(config)
    }

    /// Parse a falcon document; `source` only labels errors.
    pub fn from_json(text: &str, source: &Path) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|err| Error::config(source, err.to_string()))?;
        config.validate(source)?;
        Ok(config)
    }

    fn validate(&self, source: &Path) -> Result<()> {
        if self.autonomy == 0 {
            return Err(Error::config(source, "autonomy must be a positive integer"));
        }
        if self.departure.is_empty() {
            return Err(Error::config(source, "departure must not be empty"));
        }
        if self.arrival.is_empty() {
            return Err(Error::config(source, "arrival must not be empty"));
        }
        Ok(())
    }

    /// Inline routes followed by those read from `routes_db`, if any.
    pub fn all_routes(&self) -> Result<Vec<Route>> {
        let mut routes = self.routes.clone();
        if let Some(db) = &self.routes_db {
            routes.extend(load_routes_db(db)?);
        }
        Ok(routes)
    }
}

/// Read every row of the `ROUTES` table.
///
/// Rows are returned as-is; shape validation happens when the graph is built.
pub fn load_routes_db(db_path: &Path) -> Result<Vec<Route>> {
    if !db_path.exists() {
        return Err(Error::config(db_path, "routes database not found"));
    }
    let connection = Connection::open(db_path)?;
    let mut statement = connection.prepare(ROUTES_QUERY)?;
    let routes = statement
        .query_map([], |row| {
            Ok(Route {
                origin: row.get(0)?,
                destination: row.get(1)?,
                travel_time: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(path = %db_path.display(), routes = routes.len(), "loaded routes database");
    Ok(routes)
}

/// Countdown and bounty hunter positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpireConfig {
    /// Last day on which arriving still counts.
    pub countdown: Day,
    #[serde(default)]
    pub bounty_hunters: Vec<BountyHunter>,
}

impl EmpireConfig {
    /// Load an empire document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text, path)?;
        debug!(
            path = %path.display(),
            countdown = config.countdown,
            bounty_hunters = config.bounty_hunters.len(),
            "loaded empire document"
        );
        Ok(config)
    }

    /// Parse an empire document; `source` only labels errors.
    pub fn from_json(text: &str, source: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::config(source, err.to_string()))
    }

    /// Validated hazard lookup built from the bounty hunter records.
    pub fn hazards(&self) -> Result<HazardSchedule> {
        HazardSchedule::from_records(&self.bounty_hunters)
    }
}
