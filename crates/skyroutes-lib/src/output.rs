use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

use crate::airport::AirportId;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::SearchAlgorithm;
use crate::routing::{ItineraryPlan, StrategyKind};

/// Presentation style for turning an [`ItinerarySummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// `+`/`|`/`-` markers, safe for any terminal.
    PlainText,
    /// 🛫/🕓/🛬 markers.
    Emoji,
}

/// Why an airport appears in the itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Origin,
    /// Mandatory waypoint requested by the caller.
    Waypoint,
    /// Intermediate airport chosen by the search.
    Connection,
    Destination,
}

/// Airport visited by the itinerary, with display fields resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItineraryStop {
    pub index: usize,
    pub id: AirportId,
    pub kind: StopKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ItineraryStop {
    fn display_name(&self) -> String {
        match (&self.city, &self.country, &self.name) {
            (Some(city), Some(country), Some(name)) => format!("{city}, {country} ({name})"),
            _ => self.id.clone(),
        }
    }
}

/// Distance flown on one leg of the itinerary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegSummary {
    pub from: AirportId,
    pub to: AirportId,
    pub distance_km: f64,
}

/// Structured representation of a planned itinerary that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItinerarySummary {
    pub strategy: StrategyKind,
    pub algorithm: SearchAlgorithm,
    pub hops: usize,
    pub distance_km: f64,
    pub stops: Vec<ItineraryStop>,
    pub legs: Vec<LegSummary>,
}

impl ItinerarySummary {
    /// Convert an [`ItineraryPlan`] into a summary with resolved airport names.
    pub fn from_plan(graph: &Graph, plan: &ItineraryPlan) -> Result<Self> {
        if plan.path.is_empty() {
            return Err(Error::EmptyItinerary);
        }

        let boundaries = leg_boundaries(plan);
        let last = plan.path.len() - 1;

        let stops = plan
            .path
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let kind = if index == 0 {
                    StopKind::Origin
                } else if index == last {
                    StopKind::Destination
                } else if boundaries.contains(&index) {
                    StopKind::Waypoint
                } else {
                    StopKind::Connection
                };
                let airport = graph.airport(id);
                ItineraryStop {
                    index,
                    id: id.clone(),
                    kind,
                    name: airport.map(|a| a.name.clone()),
                    city: airport.map(|a| a.city.clone()),
                    country: airport.map(|a| a.country.clone()),
                }
            })
            .collect();

        let legs = plan
            .legs
            .iter()
            .map(|leg| LegSummary {
                from: leg.from.clone(),
                to: leg.to.clone(),
                distance_km: leg.distance,
            })
            .collect();

        Ok(Self {
            strategy: plan.strategy,
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            distance_km: plan.distance,
            stops,
            legs,
        })
    }

    /// Pretty-printed JSON representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the summary as human-readable text.
    pub fn render_with(&self, mode: RenderMode) -> String {
        let mut out = String::new();
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return out;
        };

        let _ = writeln!(
            out,
            "Itinerary from {} to {} ({} flights; strategy: {}, algorithm: {}):",
            first.display_name(),
            last.display_name(),
            self.hops,
            self.strategy,
            self.algorithm
        );
        for stop in &self.stops {
            let marker = match (mode, stop.kind) {
                (RenderMode::PlainText, StopKind::Origin) => "+",
                (RenderMode::PlainText, StopKind::Destination) => "-",
                (RenderMode::PlainText, StopKind::Waypoint) => "*",
                (RenderMode::PlainText, StopKind::Connection) => "|",
                (RenderMode::Emoji, StopKind::Origin) => "🛫",
                (RenderMode::Emoji, StopKind::Destination) => "🛬",
                (RenderMode::Emoji, StopKind::Waypoint | StopKind::Connection) => "🕓",
            };
            let _ = writeln!(out, "{} {}", marker, stop.display_name());
        }
        let _ = writeln!(out, "\nTotal distance: {:.1} km", self.distance_km);
        out
    }
}

/// Positions in the stitched path where each leg ends. Consecutive legs share
/// their junction airport, so every leg after the first adds one fewer stop.
fn leg_boundaries(plan: &ItineraryPlan) -> HashSet<usize> {
    let mut boundaries = HashSet::new();
    let mut end = 0;
    for (position, leg) in plan.legs.iter().enumerate() {
        let added = leg.path.len().saturating_sub(usize::from(position > 0));
        end += added;
        boundaries.insert(end.saturating_sub(1));
    }
    boundaries
}
