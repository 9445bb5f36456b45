use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::airport::AirportId;
use crate::graph::{Graph, NodeIndex};

/// Single-pair search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// A* guided by great-circle distance to the goal.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Uniform-cost search without a heuristic.
    Dijkstra,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::AStar => "a-star",
            SearchAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// Result of a single-pair search or a full itinerary.
///
/// An unreachable result is a normal outcome, not an error: the path is empty
/// and the distance is positive infinity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<AirportId>,
    pub distance: f64,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty() && self.distance.is_finite()
    }

    /// Number of flights in the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the shortest path between `start` and `goal` with A*, never visiting
/// an airport in `excluded`.
pub fn find_path(
    graph: &Graph,
    start: &str,
    goal: &str,
    excluded: &HashSet<AirportId>,
) -> PathResult {
    find_path_with(graph, start, goal, excluded, SearchAlgorithm::AStar)
}

/// Find the shortest path using the requested search algorithm.
///
/// Airports unknown to the graph are unreachable, except when `start` equals
/// `goal`, which always yields a single-node path of length zero.
pub fn find_path_with(
    graph: &Graph,
    start: &str,
    goal: &str,
    excluded: &HashSet<AirportId>,
    algorithm: SearchAlgorithm,
) -> PathResult {
    let mask = ExclusionMask::new(graph, excluded);
    shortest_path(graph, start, goal, &mask, algorithm)
}

/// Identifier-level search shared by [`find_path_with`] and itinerary legs.
pub(crate) fn shortest_path(
    graph: &Graph,
    start: &str,
    goal: &str,
    excluded: &ExclusionMask,
    algorithm: SearchAlgorithm,
) -> PathResult {
    if start == goal {
        return PathResult {
            path: vec![start.to_string()],
            distance: 0.0,
        };
    }

    let (Some(start_node), Some(goal_node)) = (graph.index_of(start), graph.index_of(goal)) else {
        debug!("search endpoint {} or {} not in graph", start, goal);
        return PathResult::unreachable();
    };

    match search(graph, start_node, goal_node, excluded, algorithm) {
        Some(found) => found.into_result(graph),
        None => PathResult::unreachable(),
    }
}

/// Excluded airports resolved to node indices. Identifiers the graph does not
/// know are ignored.
#[derive(Debug, Clone)]
pub(crate) struct ExclusionMask {
    blocked: Vec<bool>,
}

impl ExclusionMask {
    pub(crate) fn new(graph: &Graph, excluded: &HashSet<AirportId>) -> Self {
        let mut blocked = vec![false; graph.airport_count()];
        for node in excluded.iter().filter_map(|id| graph.index_of(id)) {
            blocked[node] = true;
        }
        Self { blocked }
    }

    fn contains(&self, node: NodeIndex) -> bool {
        self.blocked.get(node).copied().unwrap_or(false)
    }
}

/// Path found by [`search`], expressed in node indices.
#[derive(Debug, Clone, PartialEq)]
struct SearchPath {
    nodes: Vec<NodeIndex>,
    distance: f64,
}

impl SearchPath {
    fn into_result(self, graph: &Graph) -> PathResult {
        PathResult {
            path: self
                .nodes
                .iter()
                .map(|&node| graph.id_at(node).to_string())
                .collect(),
            distance: self.distance,
        }
    }
}

/// Best-first search over node indices. The open set is a binary heap with
/// lazy invalidation: entries whose cost is worse than the current best known
/// cost for their node are skipped when popped.
fn search(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    excluded: &ExclusionMask,
    algorithm: SearchAlgorithm,
) -> Option<SearchPath> {
    let goal_position = graph.airport_at(goal).coordinates();
    let heuristic = |node: NodeIndex| match algorithm {
        SearchAlgorithm::AStar => graph.airport_at(node).coordinates().distance_to(&goal_position),
        SearchAlgorithm::Dijkstra => 0.0,
    };

    let mut g_score = vec![f64::INFINITY; graph.airport_count()];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; graph.airport_count()];
    let mut open = BinaryHeap::new();
    let mut expanded = 0usize;

    g_score[start] = 0.0;
    open.push(SearchEntry::new(start, 0.0, heuristic(start)));

    while let Some(entry) = open.pop() {
        if entry.cost.0 > g_score[entry.node] {
            continue;
        }
        expanded += 1;

        if entry.node == goal {
            debug!(
                %algorithm,
                expanded,
                distance = entry.cost.0,
                "search reached {}",
                graph.id_at(goal)
            );
            return Some(SearchPath {
                nodes: reconstruct_path(&parents, start, goal),
                distance: entry.cost.0,
            });
        }

        trace!("expanding {} at g={}", graph.id_at(entry.node), entry.cost.0);
        for edge in graph.edges(entry.node) {
            let next = edge.target;
            if excluded.contains(next) {
                continue;
            }

            let tentative_g = entry.cost.0 + edge.distance;
            if tentative_g < g_score[next] {
                g_score[next] = tentative_g;
                parents[next] = Some(entry.node);
                open.push(SearchEntry::new(next, tentative_g, heuristic(next)));
            }
        }
    }

    debug!(
        %algorithm,
        expanded,
        "no path from {} to {}",
        graph.id_at(start),
        graph.id_at(goal)
    );
    None
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct SearchEntry {
    node: NodeIndex,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl SearchEntry {
    fn new(node: NodeIndex, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for SearchEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for SearchEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
