//! Common test utilities and fixture helpers.
//!
//! Provides the checked-in European airport fixture and a small abstract
//! graph whose airports all share one coordinate, so the heuristic is zero.

use std::path::PathBuf;

use skyroutes_lib::{build_graph, load_dataset, Airport, DatasetPaths, Graph, Route};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Graph built from `docs/fixtures/{airports,routes}.csv`.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    let dataset = load_dataset(&DatasetPaths::in_dir(&fixtures_dir())).expect("fixture loads");
    build_graph(&dataset.airports, &dataset.routes)
}

/// Airports at the same coordinates, one per identifier.
#[allow(dead_code)]
pub fn colocated(ids: &[&str]) -> Vec<Airport> {
    ids.iter()
        .map(|id| Airport::new(*id, format!("{id} Airport"), *id, "Testland", 0.0, 0.0))
        .collect()
}

/// A–B (100), B–C (50), A–C (200), C–D (30).
#[allow(dead_code)]
pub fn four_node_graph() -> Graph {
    build_graph(
        &colocated(&["A", "B", "C", "D"]),
        &[
            Route::new("A", "B", 100.0),
            Route::new("B", "C", 50.0),
            Route::new("A", "C", 200.0),
            Route::new("C", "D", 30.0),
        ],
    )
}

/// Assert every consecutive pair is joined by an edge and the distance is
/// the sum of those edges.
#[allow(dead_code)]
pub fn assert_valid_path(graph: &Graph, path: &[String], distance: f64) {
    let mut total = 0.0;
    for pair in path.windows(2) {
        assert_ne!(pair[0], pair[1], "consecutive duplicate {}", pair[0]);
        let weight = graph
            .edge_weight(&pair[0], &pair[1])
            .unwrap_or_else(|| panic!("no edge {} -> {}", pair[0], pair[1]));
        total += weight;
    }
    assert!(
        (total - distance).abs() < 1e-6,
        "reported {distance}, edges sum to {total}"
    );
}
