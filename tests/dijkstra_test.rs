use path_exercises::{
    error::InvalidInput,
    graphs::{edge::WeightedEdge, UNREACHABLE},
    search::{engine::ShortestPathEngine, SearchOptions},
    shortest_path,
};

fn edges(raw: &[(&'static str, &'static str, i64)]) -> Vec<WeightedEdge<&'static str>> {
    raw.iter().map(|&edge| edge.into()).collect()
}

fn directed() -> ShortestPathEngine {
    ShortestPathEngine::new(SearchOptions::default().directed())
}

#[test]
fn two_hops_beat_heavy_direct_edge() {
    let path = shortest_path(
        &["A", "B", "C"],
        &edges(&[("A", "B", 4), ("B", "C", 2), ("A", "C", 10)]),
        &"A",
        &"C",
    )
    .unwrap();

    assert_eq!(path.distance, 6);
    assert_eq!(path.path, vec!["A", "B", "C"]);
}

#[test]
fn no_edges_means_unreachable() {
    let path = shortest_path(&["A", "B"], &[], &"A", &"B").unwrap();

    assert_eq!(path.distance, UNREACHABLE);
    assert!(!path.is_reachable());
    assert!(path.path.is_empty());
}

#[test]
fn direct_edge_beats_two_hops_when_directed() {
    let path = directed()
        .single_target(
            &["A", "B", "C"],
            &edges(&[("A", "B", 1), ("A", "C", 1), ("B", "C", 1)]),
            &"A",
            &"C",
        )
        .unwrap();

    assert_eq!(path.distance, 1);
    assert_eq!(path.path, vec!["A", "C"]);
}

#[test]
fn source_equals_target() {
    let nodes = ["A", "B", "C"];
    let graph = edges(&[("A", "B", 4), ("B", "C", 2)]);

    for engine in [ShortestPathEngine::default(), directed()] {
        let path = engine.single_target(&nodes, &graph, &"A", &"A").unwrap();
        assert_eq!(path.distance, 0);
        assert_eq!(path.path, vec!["A"]);
    }
}

#[test]
fn negative_weight_is_rejected() {
    let result = shortest_path(&["A", "B"], &edges(&[("A", "B", -3)]), &"A", &"B");

    assert_eq!(
        result.err(),
        Some(InvalidInput::NegativeWeight {
            index: 0,
            tail: "A".to_string(),
            head: "B".to_string(),
            weight: -3,
        })
    );
}

#[test]
fn unknown_source_is_rejected() {
    let result = shortest_path(&["A", "B"], &edges(&[("A", "B", 1)]), &"X", &"B");

    assert_eq!(
        result.err(),
        Some(InvalidInput::UnknownSource {
            node: "X".to_string()
        })
    );
}

#[test]
fn unknown_edge_endpoint_is_rejected() {
    let result = ShortestPathEngine::default().all_destinations(
        &["A", "B"],
        &edges(&[("A", "B", 1), ("B", "Q", 1)]),
        &"A",
    );

    assert!(matches!(
        result.err(),
        Some(InvalidInput::UnknownEdgeEndpoint { index: 1, .. })
    ));
}

#[test]
fn directed_edges_are_one_way() {
    let graph = edges(&[("A", "B", 1)]);

    let forward = directed().single_target(&["A", "B"], &graph, &"A", &"B").unwrap();
    let backward = directed().single_target(&["A", "B"], &graph, &"B", &"A").unwrap();
    let undirected = shortest_path(&["A", "B"], &graph, &"B", &"A").unwrap();

    assert_eq!(forward.distance, 1);
    assert!(!backward.is_reachable());
    assert_eq!(undirected.path, vec!["B", "A"]);
}

#[test]
fn disconnected_node_in_all_destinations() {
    let result = ShortestPathEngine::default()
        .all_destinations(&["A", "B", "C"], &edges(&[("A", "B", 2)]), &"A")
        .unwrap();

    assert_eq!(result.distance(&"A"), 0);
    assert_eq!(result.distance(&"B"), 2);
    assert_eq!(result.distance(&"C"), UNREACHABLE);
    assert!(result.path_to(&"C").path.is_empty());
    assert_eq!(result.path_to(&"B").path, vec!["A", "B"]);
}

#[test]
fn zero_weight_edges_and_self_loops() {
    let nodes = ["A", "B", "C"];
    let graph = edges(&[
        ("A", "A", 0),
        ("A", "B", 0),
        ("B", "B", 3),
        ("B", "C", 0),
        ("C", "A", 0),
    ]);

    let path = shortest_path(&nodes, &graph, &"A", &"C").unwrap();
    assert_eq!(path.distance, 0);
    assert_eq!(path.path.first(), Some(&"A"));
    assert_eq!(path.path.last(), Some(&"C"));
}

#[test]
fn integer_node_ids() {
    let graph: Vec<WeightedEdge<u32>> = vec![(0, 1, 7).into(), (1, 2, 1).into(), (0, 2, 9).into()];
    let path = shortest_path(&[0, 1, 2], &graph, &0, &2).unwrap();

    assert_eq!(path.distance, 8);
    assert_eq!(path.path, vec![0, 1, 2]);
}

#[test]
fn parallel_edges_use_the_lightest() {
    let path = directed()
        .single_target(
            &["A", "B"],
            &edges(&[("A", "B", 9), ("A", "B", 2), ("A", "B", 5)]),
            &"A",
            &"B",
        )
        .unwrap();

    assert_eq!(path.distance, 2);
}

#[test]
fn events_stop_with_target() {
    let nodes = ["A", "B", "C", "D"];
    let graph = edges(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1)]);

    let early = ShortestPathEngine::new(SearchOptions::default().with_events())
        .single_target(&nodes, &graph, &"A", &"B")
        .unwrap();
    let exhaustive = ShortestPathEngine::new(SearchOptions::default().with_events().exhaustive())
        .single_target(&nodes, &graph, &"A", &"B")
        .unwrap();

    assert_eq!(early.distance, exhaustive.distance);
    assert_eq!(early.path, exhaustive.path);
    assert_eq!(early.events.len(), 1);
    assert_eq!(exhaustive.events.len(), 3);
}
