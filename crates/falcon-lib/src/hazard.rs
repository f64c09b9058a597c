//! Hazard lookup keyed by `(location, day)`.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Day;

/// A bounty hunter stationed on a planet for one day.
///
/// The day is signed so that negative values are reported as
/// [`Error::InvalidHazardRecord`] rather than as a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyHunter {
    pub planet: String,
    pub day: i64,
}

impl BountyHunter {
    pub fn new(planet: impl Into<String>, day: i64) -> Self {
        Self {
            planet: planet.into(),
            day,
        }
    }
}

/// Days on which each location is watched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HazardSchedule {
    days: HashMap<String, HashSet<Day>>,
}

impl HazardSchedule {
    /// Build the schedule, rejecting records with an empty planet or a negative day.
    ///
    /// Duplicate records collapse into a single hazard.
    pub fn from_records(records: &[BountyHunter]) -> Result<Self> {
        let mut days: HashMap<String, HashSet<Day>> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            if record.planet.is_empty() {
                return Err(Error::InvalidHazardRecord {
                    index,
                    reason: "planet must not be empty".to_string(),
                });
            }
            let day = Day::try_from(record.day).map_err(|_| Error::InvalidHazardRecord {
                index,
                reason: format!("day must be a non-negative integer, got {}", record.day),
            })?;
            days.entry(record.planet.clone()).or_default().insert(day);
        }
        Ok(Self { days })
    }

    /// Whether arriving at `location` on `day` meets a hazard.
    pub fn is_hazardous(&self, location: &str, day: Day) -> bool {
        self.days
            .get(location)
            .is_some_and(|days| days.contains(&day))
    }

    /// Number of distinct `(location, day)` hazards.
    pub fn len(&self) -> usize {
        self.days.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
