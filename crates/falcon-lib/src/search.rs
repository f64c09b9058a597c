//! Minimum-capture search over `(day, location, fuel)` states.
//!
//! Every move costs either zero or one capture, so a best-first expansion
//! ordered by capture count settles each state at its optimum the first time a
//! non-stale entry for it is popped. The frontier never decreases priorities in
//! place: improved candidates are pushed again and superseded entries are
//! dropped when they surface.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use crate::graph::{Day, Graph, LocationId};
use crate::hazard::HazardSchedule;

/// Traveler at `location` on `day` with `fuel` days of autonomy left.
///
/// Fuel is part of the identity: the same place and day with a fuller tank
/// opens different moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchState {
    pub day: Day,
    pub location: LocationId,
    pub fuel: Day,
}

/// Move that produced an itinerary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Initial position on day zero.
    Depart,
    /// Stay one day without refuelling. Never meets a hazard.
    Wait,
    /// Stay one day and fill the tank back to full autonomy.
    Refuel,
    /// Travel along a route, spending its travel time in fuel and days.
    Jump,
}

/// One step of a minimum-capture itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryStep {
    pub day: Day,
    pub location: String,
    pub fuel: Day,
    pub action: Action,
    /// Whether this step met a hazard and cost one capture.
    pub hazard: bool,
}

/// Sequence of moves reaching the goal with the fewest captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub captures: u32,
    pub steps: Vec<ItineraryStep>,
}

impl Itinerary {
    /// Day on which the traveler reaches the goal.
    pub fn arrival_day(&self) -> Day {
        self.steps.last().map(|step| step.day).unwrap_or_default()
    }
}

/// Find the fewest hazards met on any arrival at `goal` no later than `deadline`.
///
/// Returns `None` when no arrival is possible within the deadline. The start
/// state is `(0, start, autonomy)`.
pub fn minimum_captures(
    graph: &Graph,
    autonomy: Day,
    start: &str,
    goal: &str,
    deadline: Day,
    hazards: &HazardSchedule,
) -> Option<u32> {
    let Some((start_id, goal_id)) = resolve_endpoints(graph, start, goal) else {
        return (start == goal).then_some(0);
    };

    let mut search = CaptureSearch::new(graph, hazards, autonomy, deadline, false);
    search.run(start_id, goal_id).map(|(captures, _)| captures)
}

/// Same search as [`minimum_captures`], also returning the moves that achieve it.
pub fn plan_itinerary(
    graph: &Graph,
    autonomy: Day,
    start: &str,
    goal: &str,
    deadline: Day,
    hazards: &HazardSchedule,
) -> Option<Itinerary> {
    let Some((start_id, goal_id)) = resolve_endpoints(graph, start, goal) else {
        return (start == goal).then(|| Itinerary {
            captures: 0,
            steps: vec![ItineraryStep {
                day: 0,
                location: start.to_string(),
                fuel: autonomy,
                action: Action::Depart,
                hazard: false,
            }],
        });
    };

    let mut search = CaptureSearch::new(graph, hazards, autonomy, deadline, true);
    let (captures, reached) = search.run(start_id, goal_id)?;
    Some(Itinerary {
        captures,
        steps: search.reconstruct(reached),
    })
}

/// Resolve both endpoints; `None` means the goal cannot be reached by moving.
fn resolve_endpoints(graph: &Graph, start: &str, goal: &str) -> Option<(LocationId, LocationId)> {
    Some((graph.location_id(start)?, graph.location_id(goal)?))
}

#[derive(Debug, Clone, Copy)]
struct Link {
    parent: SearchState,
    action: Action,
    hazard: bool,
}

struct CaptureSearch<'a> {
    graph: &'a Graph,
    hazards: &'a HazardSchedule,
    autonomy: Day,
    deadline: Day,
    best: HashMap<SearchState, u32>,
    frontier: BinaryHeap<QueueEntry>,
    links: Option<HashMap<SearchState, Link>>,
}

impl<'a> CaptureSearch<'a> {
    fn new(
        graph: &'a Graph,
        hazards: &'a HazardSchedule,
        autonomy: Day,
        deadline: Day,
        record_links: bool,
    ) -> Self {
        Self {
            graph,
            hazards,
            autonomy,
            deadline,
            best: HashMap::new(),
            frontier: BinaryHeap::new(),
            links: record_links.then(HashMap::new),
        }
    }

    fn run(&mut self, start: LocationId, goal: LocationId) -> Option<(u32, SearchState)> {
        let initial = SearchState {
            day: 0,
            location: start,
            fuel: self.autonomy,
        };
        self.best.insert(initial, 0);
        self.frontier.push(QueueEntry::new(0, initial));

        let mut settled = 0usize;
        while let Some(entry) = self.frontier.pop() {
            let state = entry.state;
            if self.best.get(&state) != Some(&entry.captures) {
                continue;
            }
            settled += 1;
            trace!(
                day = state.day,
                location = state.location,
                fuel = state.fuel,
                captures = entry.captures,
                "settled state"
            );

            if state.location == goal && state.day <= self.deadline {
                debug!(
                    captures = entry.captures,
                    arrival_day = state.day,
                    settled,
                    "goal reached"
                );
                return Some((entry.captures, state));
            }

            self.expand(state, entry.captures);
        }

        debug!(settled, deadline = self.deadline, "goal unreachable before deadline");
        None
    }

    fn expand(&mut self, state: SearchState, captures: u32) {
        if let Some(next_day) = state.day.checked_add(1).filter(|day| *day <= self.deadline) {
            let waited = SearchState {
                day: next_day,
                ..state
            };
            self.relax(state, Action::Wait, waited, captures, false);

            let hazard = self.is_hazardous(state.location, next_day);
            let refuelled = SearchState {
                day: next_day,
                location: state.location,
                fuel: self.autonomy,
            };
            self.relax(state, Action::Refuel, refuelled, captures, hazard);
        }

        let graph = self.graph;
        for edge in graph.neighbours(state.location) {
            if edge.cost > state.fuel {
                continue;
            }
            let Some(arrival) = state
                .day
                .checked_add(edge.cost)
                .filter(|day| *day <= self.deadline)
            else {
                continue;
            };

            let hazard = self.is_hazardous(edge.target, arrival);
            let jumped = SearchState {
                day: arrival,
                location: edge.target,
                fuel: state.fuel - edge.cost,
            };
            self.relax(state, Action::Jump, jumped, captures, hazard);
        }
    }

    fn relax(
        &mut self,
        parent: SearchState,
        action: Action,
        next: SearchState,
        captures: u32,
        hazard: bool,
    ) {
        let candidate = captures + u32::from(hazard);
        if let Some(&known) = self.best.get(&next) {
            if known <= candidate {
                return;
            }
        }

        self.best.insert(next, candidate);
        if let Some(links) = self.links.as_mut() {
            links.insert(
                next,
                Link {
                    parent,
                    action,
                    hazard,
                },
            );
        }
        self.frontier.push(QueueEntry::new(candidate, next));
    }

    fn is_hazardous(&self, location: LocationId, day: Day) -> bool {
        self.graph
            .location_name(location)
            .is_some_and(|name| self.hazards.is_hazardous(name, day))
    }

    fn reconstruct(&self, reached: SearchState) -> Vec<ItineraryStep> {
        let Some(links) = self.links.as_ref() else {
            return Vec::new();
        };

        let mut steps = Vec::new();
        let mut current = reached;
        loop {
            let link = links.get(&current);
            steps.push(ItineraryStep {
                day: current.day,
                location: self
                    .graph
                    .location_name(current.location)
                    .unwrap_or("<unknown>")
                    .to_string(),
                fuel: current.fuel,
                action: link.map_or(Action::Depart, |link| link.action),
                hazard: link.is_some_and(|link| link.hazard),
            });
            match link {
                Some(link) => current = link.parent,
                None => break,
            }
        }
        steps.reverse();
        steps
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    captures: u32,
    state: SearchState,
}

impl QueueEntry {
    fn new(captures: u32, state: SearchState) -> Self {
        Self { captures, state }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by captures.
        other
            .captures
            .cmp(&self.captures)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
