mod common;

use std::collections::HashSet;

use skyroutes_lib::{
    find_path, plan_itinerary, plan_itinerary_with, plan_route, Error, InOrderStrategy,
    ItineraryRequest, SearchAlgorithm, StrategyKind,
};

use common::{assert_valid_path, fixture_graph, four_node_graph};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|id| id.to_string()).collect()
}

#[test]
fn four_node_example_goes_through_cheaper_leg() {
    let graph = four_node_graph();
    let result = plan_itinerary(&graph, "A", "D", &ids(&["C"]), &HashSet::new());
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert_eq!(result.distance, 180.0);
}

#[test]
fn no_waypoints_matches_single_search() {
    let graph = fixture_graph();
    let planned = plan_itinerary(&graph, "MAD", "VIE", &[], &HashSet::new());
    let direct = find_path(&graph, "MAD", "VIE", &HashSet::new());
    assert_eq!(planned, direct);
}

#[test]
fn greedy_orders_waypoints_by_leg_distance() {
    let graph = fixture_graph();
    let result = plan_itinerary(&graph, "MAD", "VIE", &ids(&["FCO", "LHR"]), &HashSet::new());
    assert_eq!(
        result.path,
        vec!["MAD", "LHR", "AMS", "FRA", "ZRH", "FCO", "MUC", "VIE"]
    );
    assert!((result.distance - 4128.2).abs() < 1e-6);
    assert_valid_path(&graph, &result.path, result.distance);
}

#[test]
fn waypoint_order_in_input_does_not_change_distinct_choices() {
    let graph = fixture_graph();
    let a = plan_itinerary(&graph, "MAD", "VIE", &ids(&["FCO", "LHR"]), &HashSet::new());
    let b = plan_itinerary(&graph, "MAD", "VIE", &ids(&["LHR", "FCO"]), &HashSet::new());
    assert_eq!(a, b);
}

#[test]
fn repeated_planning_is_deterministic() {
    let graph = fixture_graph();
    let excluded: HashSet<String> = ids(&["CDG"]).into_iter().collect();
    let waypoints = ids(&["AMS", "FCO", "DUB"]);
    let first = plan_itinerary(&graph, "LIS", "VIE", &waypoints, &excluded);
    for _ in 0..10 {
        assert_eq!(plan_itinerary(&graph, "LIS", "VIE", &waypoints, &excluded), first);
    }
}

#[test]
fn revisits_are_allowed_but_never_consecutive() {
    let graph = fixture_graph();
    let excluded: HashSet<String> = ids(&["LHR"]).into_iter().collect();
    let result = plan_itinerary(&graph, "LIS", "VIE", &ids(&["DUB"]), &excluded);
    assert_eq!(
        result.path,
        vec!["LIS", "MAD", "CDG", "AMS", "DUB", "AMS", "FRA", "VIE"]
    );
    assert!((result.distance - 4550.9).abs() < 1e-6);
    assert_valid_path(&graph, &result.path, result.distance);
}

#[test]
fn excluded_airports_never_appear() {
    let graph = fixture_graph();
    let excluded: HashSet<String> = ids(&["ZRH", "CDG"]).into_iter().collect();
    let result = plan_itinerary(&graph, "MAD", "MUC", &ids(&["FCO"]), &excluded);
    assert!(result.is_reachable());
    assert!(result.path.iter().all(|id| !excluded.contains(id)));
    assert_valid_path(&graph, &result.path, result.distance);
}

#[test]
fn unreachable_waypoint_discards_partial_work() {
    let graph = fixture_graph();
    let result = plan_itinerary(&graph, "MAD", "FRA", &ids(&["CDG", "KEF"]), &HashSet::new());
    assert!(result.path.is_empty());
    assert_eq!(result.distance, f64::INFINITY);
}

#[test]
fn unreachable_destination_discards_partial_work() {
    let graph = four_node_graph();
    let excluded: HashSet<String> = ids(&["C"]).into_iter().collect();
    let result = plan_itinerary(&graph, "A", "D", &ids(&["B"]), &excluded);
    assert!(!result.is_reachable());
}

#[test]
fn duplicate_waypoints_are_visited_once() {
    let graph = four_node_graph();
    let result = plan_itinerary(&graph, "A", "D", &ids(&["C", "C", "B"]), &HashSet::new());
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert_eq!(result.distance, 180.0);
}

#[test]
fn waypoint_equal_to_origin_adds_nothing() {
    let graph = four_node_graph();
    let result = plan_itinerary(&graph, "A", "D", &ids(&["A"]), &HashSet::new());
    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert_eq!(result.distance, 180.0);
}

#[test]
fn in_order_strategy_keeps_caller_order() {
    let graph = fixture_graph();
    let result = plan_itinerary_with(
        &graph,
        "MAD",
        "VIE",
        &ids(&["FCO", "LHR"]),
        &HashSet::new(),
        &InOrderStrategy,
        SearchAlgorithm::AStar,
    );
    assert_eq!(result.path.first().map(String::as_str), Some("MAD"));
    let fco = result.path.iter().position(|id| id == "FCO").unwrap();
    let lhr = result.path.iter().position(|id| id == "LHR").unwrap();
    assert!(fco < lhr);
    assert_valid_path(&graph, &result.path, result.distance);
}

#[test]
fn plan_route_returns_leg_details() {
    let graph = fixture_graph();
    let request = ItineraryRequest::new("MAD", "VIE")
        .with_waypoint("FCO")
        .with_waypoint("LHR");
    let plan = plan_route(&graph, &request).expect("itinerary exists");

    assert_eq!(plan.strategy, StrategyKind::GreedyNearest);
    let legs: Vec<_> = plan
        .legs
        .iter()
        .map(|leg| (leg.from.as_str(), leg.to.as_str()))
        .collect();
    assert_eq!(legs, vec![("MAD", "LHR"), ("LHR", "FCO"), ("FCO", "VIE")]);
    let summed: f64 = plan.legs.iter().map(|leg| leg.distance).sum();
    assert!((summed - plan.distance).abs() < 1e-6);
    assert_eq!(plan.hop_count(), 7);
}

#[test]
fn plan_route_suggests_close_airports() {
    let graph = fixture_graph();
    let request = ItineraryRequest::new("MAD", "Frankfrt");
    let error = plan_route(&graph, &request).expect_err("unknown airport");
    match error {
        Error::UnknownAirport { id, suggestions } => {
            assert_eq!(id, "Frankfrt");
            assert_eq!(suggestions.first().map(String::as_str), Some("FRA"));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn plan_route_rejects_unknown_excluded_airport() {
    let graph = fixture_graph();
    let request = ItineraryRequest::new("MAD", "FRA").with_excluded("NOPE");
    assert!(matches!(
        plan_route(&graph, &request),
        Err(Error::UnknownAirport { .. })
    ));
}

#[test]
fn plan_route_reports_missing_endpoint() {
    let graph = fixture_graph();
    let request = ItineraryRequest::new("MAD", "MAD");
    let error = plan_route(&graph, &request).expect_err("origin cleared");
    assert_eq!(error.to_string(), "itinerary request is missing its origin");
}

#[test]
fn plan_route_reports_no_route() {
    let graph = fixture_graph();
    let request = ItineraryRequest::new("MAD", "KEF");
    let error = plan_route(&graph, &request).expect_err("no route");
    assert_eq!(error.to_string(), "no route found between MAD and KEF");
}
