use arb_detector_core::{Graph, detect_arbitrage, detect_arbitrage_any};
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..10;

fn graph_strategy(
    rates: std::ops::Range<f64>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(move |num_vertices| {
        let edge_generator = (0usize..num_vertices, 0usize..num_vertices, rates.clone());
        let edges_generator = prop::collection::vec(edge_generator, 0..50);

        (proptest::strategy::Just(num_vertices), edges_generator)
    })
}

proptest! {
    /// Property: a graph without edges never reports arbitrage, whatever the source.
    #[test]
    fn no_edges_no_arbitrage(num_vertices in NUM_VERTICES_STRATEGY) {
        let graph = Graph::new(num_vertices);
        for source in 0..num_vertices {
            prop_assert!(!detect_arbitrage(&graph, source).unwrap());
        }
        prop_assert!(!detect_arbitrage_any(&graph));
    }

    /// Property: detection is deterministic and never mutates the graph.
    #[test]
    fn detection_is_idempotent((num_vertices, edges) in graph_strategy(0.01f64..10.0)) {
        let graph = Graph::from_rates(num_vertices, &edges).unwrap();
        let before = graph.edges().to_vec();

        for source in 0..num_vertices {
            let first = detect_arbitrage(&graph, source).unwrap();
            let second = detect_arbitrage(&graph, source).unwrap();
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(graph.edges(), before.as_slice());
    }

    /// Property: when no rate exceeds 1.0 every weight is non-negative, so no loop can profit.
    #[test]
    fn losing_rates_never_arbitrage((num_vertices, edges) in graph_strategy(0.01f64..1.0)) {
        let graph = Graph::from_rates(num_vertices, &edges).unwrap();

        for source in 0..num_vertices {
            prop_assert!(!detect_arbitrage(&graph, source).unwrap());
        }
        prop_assert!(!detect_arbitrage_any(&graph));
    }

    /// Property: a ring whose rates multiply to more than 1.0 is found from every vertex on it.
    #[test]
    fn profitable_ring_is_detected(
        num_vertices in 2usize..10,
        gain in 1.001f64..1.5,
    ) {
        // Every hop loses a little except the last one, which carries the whole gain.
        let hop_rate = 0.99f64;
        let closing_rate = gain / hop_rate.powi(num_vertices as i32 - 1);

        let mut rates: Vec<(usize, usize, f64)> =
            (0..num_vertices - 1).map(|i| (i, i + 1, hop_rate)).collect();
        rates.push((num_vertices - 1, 0, closing_rate));

        let graph = Graph::from_rates(num_vertices, &rates).unwrap();
        for source in 0..num_vertices {
            prop_assert!(detect_arbitrage(&graph, source).unwrap());
        }
        prop_assert!(detect_arbitrage_any(&graph));
    }

    /// Property: any cycle found from some source is also found by the super-source check.
    #[test]
    fn any_source_check_covers_every_source((num_vertices, edges) in graph_strategy(0.5f64..2.0)) {
        let graph = Graph::from_rates(num_vertices, &edges).unwrap();

        let from_some_source = (0..num_vertices)
            .any(|source| detect_arbitrage(&graph, source).unwrap());
        if from_some_source {
            prop_assert!(detect_arbitrage_any(&graph));
        }
    }

    /// Property: stored weights are `-ln(rate)` in insertion order.
    #[test]
    fn edge_weights_transformed_correctly((num_vertices, edges) in graph_strategy(0.01f64..10.0)) {
        let graph = Graph::from_rates(num_vertices, &edges).unwrap();

        prop_assert_eq!(graph.edge_count(), edges.len());
        for (edge, &(from, to, rate)) in graph.edges().iter().zip(edges.iter()) {
            prop_assert_eq!((edge.from, edge.to), (from, to));
            prop_assert!((edge.weight + rate.ln()).abs() < 1e-9);
        }
    }

    /// Property: a rejected rate leaves the edge list exactly as it was.
    #[test]
    fn invalid_rate_leaves_graph_unchanged(
        (num_vertices, edges) in graph_strategy(0.01f64..10.0),
        bad_rate in prop_oneof![Just(0.0f64), -10.0f64..=0.0, Just(f64::NAN), Just(f64::INFINITY)],
    ) {
        let mut graph = Graph::from_rates(num_vertices, &edges).unwrap();
        let before = graph.edges().to_vec();

        prop_assert!(graph.add_edge(0, 0, bad_rate).is_err());
        prop_assert_eq!(graph.edges(), before.as_slice());
    }

    /// Property: adding an edge later does not change a result already obtained.
    #[test]
    fn earlier_results_are_not_retroactive((num_vertices, edges) in graph_strategy(0.5f64..2.0)) {
        let mut graph = Graph::from_rates(num_vertices, &edges).unwrap();
        let before = detect_arbitrage(&graph, 0).unwrap();
        let snapshot = graph.clone();

        graph.add_edge(num_vertices - 1, 0, 5.0).unwrap();

        prop_assert_eq!(detect_arbitrage(&snapshot, 0).unwrap(), before);
    }
}
