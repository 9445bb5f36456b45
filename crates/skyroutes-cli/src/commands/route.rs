//! Route command handler for planning itineraries between airports.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use skyroutes_lib::{
    plan_route, Error as RouteError, ItineraryRequest, ItinerarySummary, SearchAlgorithm,
    StrategyKind,
};

use crate::commands::load_graph;
use crate::output::{render_summary, OutputFormat};

/// Message shown when the itinerary cannot be completed.
pub const NO_ROUTE_MESSAGE: &str = "No route found with the selected conditions.";

/// Arguments for the route command.
#[derive(Debug, Clone, Args)]
pub struct RouteCommandArgs {
    /// Origin airport identifier.
    #[arg(long = "from")]
    pub from: String,
    /// Destination airport identifier.
    #[arg(long = "to")]
    pub to: String,
    /// Mandatory stop (repeatable).
    #[arg(long = "via")]
    pub via: Vec<String>,
    /// Airport to avoid (repeatable).
    #[arg(long = "avoid")]
    pub avoid: Vec<String>,
    /// Order in which stops are visited.
    #[arg(long, value_enum, default_value_t = StrategyArg::Greedy)]
    pub strategy: StrategyArg,
    /// Shortest-path search used for each leg.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
    pub algorithm: AlgorithmArg,
}

/// Waypoint ordering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Nearest unvisited stop first.
    Greedy,
    /// Stops in the order given.
    InOrder,
}

/// Leg search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    AStar,
    Dijkstra,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library request.
    ///
    /// Roles are assigned origin, destination, stops, then avoids; an airport
    /// given twice keeps the last role.
    pub fn to_request(&self) -> ItineraryRequest {
        let mut request = ItineraryRequest::new(self.from.clone(), self.to.clone())
            .with_strategy(match self.strategy {
                StrategyArg::Greedy => StrategyKind::GreedyNearest,
                StrategyArg::InOrder => StrategyKind::InOrder,
            })
            .with_algorithm(match self.algorithm {
                AlgorithmArg::AStar => SearchAlgorithm::AStar,
                AlgorithmArg::Dijkstra => SearchAlgorithm::Dijkstra,
            });
        for stop in &self.via {
            request = request.with_waypoint(stop.clone());
        }
        for avoid in &self.avoid {
            request = request.with_excluded(avoid.clone());
        }
        request
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    data_dir: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let (graph, _) = load_graph(data_dir)?;
    let request = args.to_request();

    let plan = match plan_route(&graph, &request) {
        Ok(plan) => plan,
        Err(RouteError::RouteNotFound { .. }) => anyhow::bail!(NO_ROUTE_MESSAGE),
        Err(err) => return Err(err).context("failed to plan itinerary"),
    };

    let summary = ItinerarySummary::from_plan(&graph, &plan)?;
    render_summary(&summary, format).context("failed to write itinerary")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyroutes_lib::Role;

    fn args() -> RouteCommandArgs {
        RouteCommandArgs {
            from: "MAD".to_string(),
            to: "VIE".to_string(),
            via: vec!["FCO".to_string(), "LHR".to_string()],
            avoid: vec!["CDG".to_string()],
            strategy: StrategyArg::InOrder,
            algorithm: AlgorithmArg::Dijkstra,
        }
    }

    #[test]
    fn converts_to_library_request() {
        let request = args().to_request();
        assert_eq!(request.origin.as_deref(), Some("MAD"));
        assert_eq!(request.destination.as_deref(), Some("VIE"));
        assert_eq!(request.waypoints, vec!["FCO", "LHR"]);
        assert_eq!(request.excluded, vec!["CDG"]);
        assert_eq!(request.strategy, StrategyKind::InOrder);
        assert_eq!(request.algorithm, SearchAlgorithm::Dijkstra);
    }

    #[test]
    fn later_role_wins_for_repeated_airport() {
        let mut args = args();
        args.avoid.push("FCO".to_string());
        let request = args.to_request();
        assert_eq!(request.role_of("FCO"), Some(Role::Avoid));
        assert_eq!(request.waypoints, vec!["LHR"]);
    }
}
