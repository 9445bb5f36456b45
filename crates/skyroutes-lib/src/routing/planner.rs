//! Waypoint sequencing strategies.
//!
//! An [`ItineraryStrategy`] decides the order in which mandatory waypoints are
//! visited and returns one [`Leg`] per hop of that order. Stitching the legs
//! into a single path is left to the caller in [`super`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::airport::AirportId;
use crate::graph::Graph;
use crate::path::{shortest_path, ExclusionMask, SearchAlgorithm};

use super::StrategyKind;

/// One origin-to-waypoint or waypoint-to-destination sub-path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: AirportId,
    pub to: AirportId,
    pub path: Vec<AirportId>,
    pub distance: f64,
}

impl Leg {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty() && self.distance.is_finite()
    }
}

/// Single-pair searches sharing one graph, exclusion set and algorithm.
#[derive(Debug, Clone)]
pub struct LegSearch<'a> {
    graph: &'a Graph,
    excluded: ExclusionMask,
    algorithm: SearchAlgorithm,
}

impl<'a> LegSearch<'a> {
    pub fn new(
        graph: &'a Graph,
        excluded: &HashSet<AirportId>,
        algorithm: SearchAlgorithm,
    ) -> Self {
        Self {
            graph,
            excluded: ExclusionMask::new(graph, excluded),
            algorithm,
        }
    }

    /// Shortest leg between two airports; unreachable legs carry an empty
    /// path and infinite distance.
    pub fn leg(&self, from: &str, to: &str) -> Leg {
        let result = shortest_path(self.graph, from, to, &self.excluded, self.algorithm);
        Leg {
            from: from.to_string(),
            to: to.to_string(),
            path: result.path,
            distance: result.distance,
        }
    }
}

/// Trait for waypoint sequencing strategies.
pub trait ItineraryStrategy: Send + Sync {
    /// The identifier for this strategy.
    fn kind(&self) -> StrategyKind;

    /// Produce the legs from `origin` through every waypoint to `destination`.
    ///
    /// Returns `None` as soon as a chosen leg is unreachable; partial
    /// itineraries are never returned.
    fn plan_legs(
        &self,
        search: &LegSearch<'_>,
        origin: &str,
        destination: &str,
        waypoints: &[AirportId],
    ) -> Option<Vec<Leg>>;
}

/// Repeatedly travels to the nearest unvisited waypoint.
///
/// This is a greedy approximation: it never backtracks or tries alternative
/// orderings. Ties go to the waypoint listed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyNearestStrategy;

impl ItineraryStrategy for GreedyNearestStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::GreedyNearest
    }

    fn plan_legs(
        &self,
        search: &LegSearch<'_>,
        origin: &str,
        destination: &str,
        waypoints: &[AirportId],
    ) -> Option<Vec<Leg>> {
        let mut current = origin.to_string();
        let mut remaining: Vec<&str> = waypoints.iter().map(String::as_str).collect();
        let mut legs = Vec::with_capacity(waypoints.len() + 1);

        while !remaining.is_empty() {
            let mut best: Option<(usize, Leg)> = None;
            for (position, waypoint) in remaining.iter().enumerate() {
                let candidate = search.leg(&current, waypoint);
                let closer = match &best {
                    Some((_, leg)) => candidate.distance < leg.distance,
                    None => true,
                };
                if closer {
                    best = Some((position, candidate));
                }
            }

            let (position, leg) = best?;
            if !leg.is_reachable() {
                debug!("no remaining waypoint is reachable from {}", current);
                return None;
            }

            debug!(
                distance = leg.distance,
                "nearest waypoint from {} is {}",
                current,
                leg.to
            );
            current = remaining.remove(position).to_string();
            legs.push(leg);
        }

        let last = search.leg(&current, destination);
        if !last.is_reachable() {
            debug!("destination {} unreachable from {}", destination, current);
            return None;
        }
        legs.push(last);
        Some(legs)
    }
}

/// Visits waypoints in the order the caller listed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InOrderStrategy;

impl ItineraryStrategy for InOrderStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::InOrder
    }

    fn plan_legs(
        &self,
        search: &LegSearch<'_>,
        origin: &str,
        destination: &str,
        waypoints: &[AirportId],
    ) -> Option<Vec<Leg>> {
        let stops = std::iter::once(origin)
            .chain(waypoints.iter().map(String::as_str))
            .chain(std::iter::once(destination))
            .collect::<Vec<_>>();

        stops
            .windows(2)
            .map(|pair| {
                let leg = search.leg(pair[0], pair[1]);
                if leg.is_reachable() {
                    Some(leg)
                } else {
                    debug!("leg {} -> {} unreachable", pair[0], pair[1]);
                    None
                }
            })
            .collect()
    }
}

/// Select the strategy implementation for a given kind.
pub fn select_strategy(kind: StrategyKind) -> Box<dyn ItineraryStrategy> {
    match kind {
        StrategyKind::GreedyNearest => Box::new(GreedyNearestStrategy),
        StrategyKind::InOrder => Box::new(InOrderStrategy),
    }
}
