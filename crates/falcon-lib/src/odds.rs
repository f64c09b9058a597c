use std::fmt;

use serde::Serialize;

/// Chance of slipping past a single bounty hunter encounter.
pub const CAPTURE_SURVIVAL_RATE: f64 = 0.9;

/// Probability of reaching the goal without being captured.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Odds(f64);

impl Odds {
    /// Odds for a search outcome: `None` (unreachable) is `0.0`, zero captures
    /// is `1.0`, otherwise `0.9^captures`.
    pub fn from_captures(captures: Option<u32>) -> Self {
        match captures {
            None => Odds(0.0),
            Some(0) => Odds(1.0),
            Some(count) => Odds(CAPTURE_SURVIVAL_RATE.powf(f64::from(count))),
        }
    }

    pub fn probability(self) -> f64 {
        self.0
    }

    pub fn percentage(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
