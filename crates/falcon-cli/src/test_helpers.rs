// Test utilities used across `falcon-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use falcon_lib::{Action, ItineraryReport, ItineraryStep, Odds, OddsReport};

/// Odds report for the Tatooine to Endor run with the given outcome.
pub fn odds_report(captures: Option<u32>) -> OddsReport {
    OddsReport {
        departure: "Tatooine".to_string(),
        arrival: "Endor".to_string(),
        autonomy: 6,
        countdown: 9,
        captures,
        odds: Odds::from_captures(captures),
    }
}

/// Builder for tests that constructs `ItineraryStep` with sensible defaults.
pub struct StepBuilder {
    step: ItineraryStep,
}

impl StepBuilder {
    pub fn new(location: &str) -> Self {
        Self {
            step: ItineraryStep {
                day: 0,
                location: location.to_string(),
                fuel: 6,
                action: Action::Depart,
                hazard: false,
            },
        }
    }

    pub fn day(mut self, day: u32) -> Self {
        self.step.day = day;
        self
    }

    pub fn fuel(mut self, fuel: u32) -> Self {
        self.step.fuel = fuel;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.step.action = action;
        self
    }

    pub fn hazard(mut self) -> Self {
        self.step.hazard = true;
        self
    }

    pub fn build(self) -> ItineraryStep {
        self.step
    }
}

/// Two jumps with a watched refuel on Hoth.
pub fn itinerary_report() -> ItineraryReport {
    let captures = Some(1);
    ItineraryReport {
        departure: "Tatooine".to_string(),
        arrival: "Endor".to_string(),
        countdown: 9,
        captures,
        odds: Odds::from_captures(captures),
        steps: vec![
            StepBuilder::new("Tatooine").build(),
            StepBuilder::new("Hoth")
                .day(6)
                .fuel(0)
                .action(Action::Jump)
                .build(),
            StepBuilder::new("Hoth")
                .day(7)
                .action(Action::Refuel)
                .hazard()
                .build(),
            StepBuilder::new("Endor")
                .day(8)
                .fuel(5)
                .action(Action::Jump)
                .build(),
        ],
    }
}
