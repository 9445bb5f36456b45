use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::airport::{Airport, AirportId, Route};

/// Minimum Jaro-Winkler similarity for an airport to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Dense index assigned to each airport at build time.
pub(crate) type NodeIndex = usize;

/// Directed adjacency entry. Every route yields two of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub target: NodeIndex,
    pub distance: f64,
}

/// Problem found while building the graph. None of these abort construction.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildIssue {
    /// Route references an airport absent from the airport records; the route
    /// was dropped.
    MissingAirport { route: usize, airport: AirportId },
    /// Route distance was negative or not finite; the route was dropped.
    InvalidDistance { route: usize, distance: f64 },
    /// Airport record reused an identifier already seen; the record was ignored.
    DuplicateAirport { record: usize, airport: AirportId },
}

impl fmt::Display for BuildIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildIssue::MissingAirport { route, airport } => {
                write!(f, "route #{route} references unknown airport {airport}")
            }
            BuildIssue::InvalidDistance { route, distance } => {
                write!(f, "route #{route} has invalid distance {distance}")
            }
            BuildIssue::DuplicateAirport { record, airport } => {
                write!(f, "airport record #{record} duplicates identifier {airport}")
            }
        }
    }
}

#[derive(Debug, Default)]
struct GraphData {
    airports: Vec<Airport>,
    index: HashMap<AirportId, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
    issues: Vec<BuildIssue>,
}

/// Read-only airport graph. Cloning is cheap and the graph can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    data: Arc<GraphData>,
}

impl Graph {
    /// Number of airports in the graph.
    pub fn airport_count(&self) -> usize {
        self.data.airports.len()
    }

    /// Number of directed adjacency entries (twice the accepted routes).
    pub fn edge_count(&self) -> usize {
        self.data.adjacency.iter().map(Vec::len).sum()
    }

    /// Airports in record order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.data.airports.iter()
    }

    pub fn airport(&self, id: &str) -> Option<&Airport> {
        self.index_of(id).map(|node| self.airport_at(node))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.data.index.contains_key(id)
    }

    /// Outgoing `(neighbour, distance)` pairs in insertion order. Unknown
    /// airports have no neighbours.
    pub fn neighbours<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.index_of(id)
            .into_iter()
            .flat_map(move |node| self.edges(node).iter())
            .map(move |edge| (self.id_at(edge.target), edge.distance))
    }

    /// Shortest direct edge between two airports, if any.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, distance)| distance)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Greater))
    }

    /// Diagnostics recorded while building the graph.
    pub fn issues(&self) -> &[BuildIssue] {
        &self.data.issues
    }

    /// Airport identifiers that closely resemble `query`, best match first.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .data
            .airports
            .iter()
            .map(|airport| {
                let score = [&airport.id, &airport.name, &airport.city]
                    .iter()
                    .map(|field| strsim::jaro_winkler(&needle, &field.to_lowercase()))
                    .fold(0.0, f64::max);
                (score, airport.id.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.data.index.get(id).copied()
    }

    pub(crate) fn edges(&self, node: NodeIndex) -> &[Edge] {
        self.data
            .adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn airport_at(&self, node: NodeIndex) -> &Airport {
        &self.data.airports[node]
    }

    pub(crate) fn id_at(&self, node: NodeIndex) -> &str {
        &self.data.airports[node].id
    }
}

/// Build the routing graph from flat airport and route records.
///
/// Routes referencing unknown airports, or carrying a negative or non-finite
/// distance, are dropped and recorded in [`Graph::issues`].
pub fn build_graph(airports: &[Airport], routes: &[Route]) -> Graph {
    let mut data = GraphData::default();

    for (record, airport) in airports.iter().enumerate() {
        if data.index.contains_key(&airport.id) {
            warn!("ignoring duplicate airport record {}", airport.id);
            data.issues.push(BuildIssue::DuplicateAirport {
                record,
                airport: airport.id.clone(),
            });
            continue;
        }
        data.index.insert(airport.id.clone(), data.airports.len());
        data.airports.push(airport.clone());
    }
    data.adjacency = vec![Vec::new(); data.airports.len()];

    for (position, route) in routes.iter().enumerate() {
        if !(route.distance.is_finite() && route.distance >= 0.0) {
            warn!(
                "dropping route {} - {} with invalid distance {}",
                route.origin, route.destination, route.distance
            );
            data.issues.push(BuildIssue::InvalidDistance {
                route: position,
                distance: route.distance,
            });
            continue;
        }

        let (origin, destination) = match (
            data.index.get(&route.origin).copied(),
            data.index.get(&route.destination).copied(),
        ) {
            (Some(origin), Some(destination)) => (origin, destination),
            (origin, _) => {
                let missing = if origin.is_none() {
                    &route.origin
                } else {
                    &route.destination
                };
                warn!("dropping route referencing unknown airport {}", missing);
                data.issues.push(BuildIssue::MissingAirport {
                    route: position,
                    airport: missing.clone(),
                });
                continue;
            }
        };

        data.adjacency[origin].push(Edge {
            target: destination,
            distance: route.distance,
        });
        data.adjacency[destination].push(Edge {
            target: origin,
            distance: route.distance,
        });
    }

    debug!(
        airports = data.airports.len(),
        routes = routes.len(),
        issues = data.issues.len(),
        "built airport graph"
    );

    Graph {
        data: Arc::new(data),
    }
}
