//! SkyRoutes library entry points.
//!
//! This crate turns flat airport and route records into a routing graph,
//! finds shortest paths between airports with A*, and plans multi-stop
//! itineraries through mandatory waypoints while avoiding excluded airports.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod airport;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use airport::{Airport, AirportId, Route};
pub use dataset::{
    default_data_dir, load_airports, load_dataset, load_routes, resolve_data_dir, Dataset,
    DatasetPaths,
};
pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use graph::{build_graph, BuildIssue, Graph};
pub use output::{ItineraryStop, ItinerarySummary, LegSummary, RenderMode, StopKind};
pub use path::{find_path, find_path_with, PathResult, SearchAlgorithm};
pub use routing::{
    plan_itinerary, plan_itinerary_with, plan_route, select_strategy, GreedyNearestStrategy,
    InOrderStrategy, ItineraryPlan, ItineraryRequest, ItineraryStrategy, Leg, LegSearch, Role,
    StrategyKind,
};
