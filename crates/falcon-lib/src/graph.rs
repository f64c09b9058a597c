use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Dense identifier assigned to each location when the graph is built.
pub type LocationId = usize;

/// Number of days; also the unit of fuel.
pub type Day = u32;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Undirected route between two locations, as found in the input documents.
///
/// The travel time is kept signed so that zero and negative values surface as
/// [`Error::InvalidRoute`] instead of a deserialisation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    #[serde(rename = "travelTime")]
    pub travel_time: i64,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, travel_time: i64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            travel_time,
        }
    }
}

/// Directed arc within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: LocationId,
    pub cost: Day,
}

/// Adjacency structure consumed by the capture search.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Arc<Vec<String>>,
    name_to_id: Arc<HashMap<String, LocationId>>,
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Return the outgoing arcs for a given location.
    pub fn neighbours(&self, location: LocationId) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed arcs; every route contributes two.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// All location names in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Suggest known location names similar to `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

/// Build the routing graph from a list of undirected routes.
///
/// Both directions are inserted with the same cost. Parallel routes between
/// the same pair of locations are all retained.
pub fn build_graph(routes: &[Route]) -> Result<Graph> {
    let mut names: Vec<String> = Vec::new();
    let mut name_to_id: HashMap<String, LocationId> = HashMap::new();
    let mut adjacency: Vec<Vec<Edge>> = Vec::new();

    let mut intern = |name: &str, adjacency: &mut Vec<Vec<Edge>>| -> LocationId {
        if let Some(&id) = name_to_id.get(name) {
            return id;
        }
        let id = names.len();
        names.push(name.to_string());
        name_to_id.insert(name.to_string(), id);
        adjacency.push(Vec::new());
        id
    };

    for (index, route) in routes.iter().enumerate() {
        let cost = validate_route(index, route)?;
        let origin = intern(&route.origin, &mut adjacency);
        let destination = intern(&route.destination, &mut adjacency);

        adjacency[origin].push(Edge {
            target: destination,
            cost,
        });
        adjacency[destination].push(Edge {
            target: origin,
            cost,
        });
    }

    let graph = Graph {
        names: Arc::new(names),
        name_to_id: Arc::new(name_to_id),
        adjacency: Arc::new(adjacency),
    };
    debug!(
        locations = graph.location_count(),
        edges = graph.edge_count(),
        "built routing graph"
    );
    Ok(graph)
}

fn validate_route(index: usize, route: &Route) -> Result<Day> {
    let invalid = |reason: String| Error::InvalidRoute { index, reason };

    if route.origin.is_empty() {
        return Err(invalid("origin must not be empty".to_string()));
    }
    if route.destination.is_empty() {
        return Err(invalid("destination must not be empty".to_string()));
    }
    if route.travel_time <= 0 {
        return Err(invalid(format!(
            "travel time must be positive, got {}",
            route.travel_time
        )));
    }
    Day::try_from(route.travel_time)
        .map_err(|_| invalid(format!("travel time {} is too large", route.travel_time)))
}
