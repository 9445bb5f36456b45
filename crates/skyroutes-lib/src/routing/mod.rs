//! Multi-stop itinerary planning.
//!
//! This module provides:
//! - [`plan_itinerary`] - greedy multi-stop planning with the infallible
//!   "unreachable" result contract
//! - [`ItineraryRequest`] - caller-facing request with exclusive airport roles
//! - [`plan_route`] - validated planning that reports problems as [`Error`]s
//! - [`ItineraryStrategy`] - pluggable waypoint sequencing
//!
//! # Strategy Pattern
//!
//! Waypoint ordering is delegated to an [`ItineraryStrategy`]. The default
//! [`GreedyNearestStrategy`] always heads to the nearest unvisited waypoint;
//! [`InOrderStrategy`] keeps the caller's order. Both share the same leg
//! search and stitching, so a new strategy only decides the order.
//!
//! # Example
//!
//! ```ignore
//! use skyroutes_lib::{build_graph, plan_route, ItineraryRequest};
//!
//! let graph = build_graph(&airports, &routes);
//! let request = ItineraryRequest::new("MAD", "FRA").with_waypoint("CDG");
//! let plan = plan_route(&graph, &request)?;
//! println!("{} km over {} flights", plan.distance, plan.hop_count());
//! ```

mod planner;

pub use planner::{
    select_strategy, GreedyNearestStrategy, InOrderStrategy, ItineraryStrategy, Leg, LegSearch,
};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::airport::AirportId;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::{PathResult, SearchAlgorithm};

/// Maximum number of suggestions attached to an unknown airport error.
const MAX_SUGGESTIONS: usize = 3;

/// Supported waypoint sequencing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Nearest unvisited waypoint first.
    #[default]
    #[serde(rename = "greedy")]
    GreedyNearest,
    /// Waypoints in the order they were given.
    #[serde(rename = "in-order")]
    InOrder,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            StrategyKind::GreedyNearest => "greedy",
            StrategyKind::InOrder => "in-order",
        };
        f.write_str(value)
    }
}

/// Role an airport plays in an itinerary request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Origin,
    Destination,
    Stop,
    Avoid,
}

/// High-level itinerary request.
///
/// Each airport holds at most one role: assigning a role through
/// [`ItineraryRequest::assign`] (or the builder helpers) removes the airport
/// from any role it held before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryRequest {
    pub origin: Option<AirportId>,
    pub destination: Option<AirportId>,
    pub waypoints: Vec<AirportId>,
    pub excluded: Vec<AirportId>,
    pub algorithm: SearchAlgorithm,
    pub strategy: StrategyKind,
}

impl ItineraryRequest {
    /// Request from `origin` to `destination` with default algorithm and strategy.
    pub fn new(origin: impl Into<AirportId>, destination: impl Into<AirportId>) -> Self {
        let mut request = Self::default();
        request.assign(origin, Role::Origin);
        request.assign(destination, Role::Destination);
        request
    }

    pub fn with_waypoint(mut self, id: impl Into<AirportId>) -> Self {
        self.assign(id, Role::Stop);
        self
    }

    pub fn with_excluded(mut self, id: impl Into<AirportId>) -> Self {
        self.assign(id, Role::Avoid);
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Give `id` a role, dropping whatever role it held before.
    pub fn assign(&mut self, id: impl Into<AirportId>, role: Role) {
        let id = id.into();
        self.remove(&id);
        match role {
            Role::Origin => self.origin = Some(id),
            Role::Destination => self.destination = Some(id),
            Role::Stop => self.waypoints.push(id),
            Role::Avoid => self.excluded.push(id),
        }
    }

    /// Remove `id` from every role.
    pub fn remove(&mut self, id: &str) {
        if self.origin.as_deref() == Some(id) {
            self.origin = None;
        }
        if self.destination.as_deref() == Some(id) {
            self.destination = None;
        }
        self.waypoints.retain(|w| w != id);
        self.excluded.retain(|e| e != id);
    }

    /// The role currently held by `id`, if any.
    pub fn role_of(&self, id: &str) -> Option<Role> {
        if self.origin.as_deref() == Some(id) {
            Some(Role::Origin)
        } else if self.destination.as_deref() == Some(id) {
            Some(Role::Destination)
        } else if self.waypoints.iter().any(|w| w == id) {
            Some(Role::Stop)
        } else if self.excluded.iter().any(|e| e == id) {
            Some(Role::Avoid)
        } else {
            None
        }
    }
}

/// Planned itinerary returned by [`plan_route`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryPlan {
    pub strategy: StrategyKind,
    pub algorithm: SearchAlgorithm,
    pub origin: AirportId,
    pub destination: AirportId,
    pub path: Vec<AirportId>,
    pub distance: f64,
    pub legs: Vec<Leg>,
}

impl ItineraryPlan {
    /// Number of flights in the itinerary.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Plan a path from `origin` through every waypoint to `destination` using the
/// greedy nearest-waypoint strategy and A*.
///
/// Waypoints are treated as a set; duplicates are ignored and ties are broken
/// by the order given. When any leg is unreachable the result is
/// [`PathResult::unreachable`].
pub fn plan_itinerary(
    graph: &Graph,
    origin: &str,
    destination: &str,
    waypoints: &[AirportId],
    excluded: &HashSet<AirportId>,
) -> PathResult {
    plan_itinerary_with(
        graph,
        origin,
        destination,
        waypoints,
        excluded,
        &GreedyNearestStrategy,
        SearchAlgorithm::AStar,
    )
}

/// Plan an itinerary with an explicit strategy and search algorithm.
pub fn plan_itinerary_with(
    graph: &Graph,
    origin: &str,
    destination: &str,
    waypoints: &[AirportId],
    excluded: &HashSet<AirportId>,
    strategy: &dyn ItineraryStrategy,
    algorithm: SearchAlgorithm,
) -> PathResult {
    match plan_legs(graph, origin, destination, waypoints, excluded, strategy, algorithm) {
        Some(legs) => stitch(&legs),
        None => PathResult::unreachable(),
    }
}

/// Validate a request against the graph and plan it.
///
/// Unlike [`plan_itinerary`], problems are reported as errors: a missing
/// endpoint, an airport unknown to the graph, or an itinerary that cannot be
/// completed.
pub fn plan_route(graph: &Graph, request: &ItineraryRequest) -> Result<ItineraryPlan> {
    let origin = request
        .origin
        .as_deref()
        .ok_or(Error::IncompleteRequest { missing: "origin" })?;
    let destination = request
        .destination
        .as_deref()
        .ok_or(Error::IncompleteRequest {
            missing: "destination",
        })?;

    for id in std::iter::once(origin)
        .chain(std::iter::once(destination))
        .chain(request.waypoints.iter().map(String::as_str))
        .chain(request.excluded.iter().map(String::as_str))
    {
        resolve_airport(graph, id)?;
    }

    let excluded: HashSet<AirportId> = request.excluded.iter().cloned().collect();
    let strategy = select_strategy(request.strategy);
    let legs = plan_legs(
        graph,
        origin,
        destination,
        &request.waypoints,
        &excluded,
        strategy.as_ref(),
        request.algorithm,
    )
    .ok_or_else(|| Error::RouteNotFound {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })?;

    let stitched = stitch(&legs);
    info!(
        strategy = %request.strategy,
        legs = legs.len(),
        distance = stitched.distance,
        "planned itinerary {} -> {}",
        origin,
        destination
    );

    Ok(ItineraryPlan {
        strategy: request.strategy,
        algorithm: request.algorithm,
        origin: origin.to_string(),
        destination: destination.to_string(),
        path: stitched.path,
        distance: stitched.distance,
        legs,
    })
}

fn resolve_airport(graph: &Graph, id: &str) -> Result<()> {
    if graph.contains(id) {
        return Ok(());
    }
    Err(Error::UnknownAirport {
        id: id.to_string(),
        suggestions: graph.suggestions(id, MAX_SUGGESTIONS),
    })
}

fn plan_legs(
    graph: &Graph,
    origin: &str,
    destination: &str,
    waypoints: &[AirportId],
    excluded: &HashSet<AirportId>,
    strategy: &dyn ItineraryStrategy,
    algorithm: SearchAlgorithm,
) -> Option<Vec<Leg>> {
    let mut seen = HashSet::new();
    let waypoints: Vec<AirportId> = waypoints
        .iter()
        .filter(|&id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    debug!(
        strategy = %strategy.kind(),
        %algorithm,
        waypoints = waypoints.len(),
        excluded = excluded.len(),
        "planning {} -> {}",
        origin,
        destination
    );

    let search = LegSearch::new(graph, excluded, algorithm);
    strategy.plan_legs(&search, origin, destination, &waypoints)
}

/// Concatenate legs, trimming the junction airport shared by consecutive legs.
fn stitch(legs: &[Leg]) -> PathResult {
    let mut path: Vec<AirportId> = Vec::new();
    let mut distance = 0.0;
    for leg in legs {
        let skip = usize::from(!path.is_empty());
        path.extend(leg.path.iter().skip(skip).cloned());
        distance += leg.distance;
    }
    PathResult { path, distance }
}
