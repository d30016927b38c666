use super::graph::Graph;
use super::traits::ArbitrageDetector;
use common::{
    error::Error,
    types::{Edge, VertexId},
};
use tracing::debug;

/// Detector running a plain Bellman-Ford relaxation over the graph's edge list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl ArbitrageDetector for BellmanFord {
    fn has_arbitrage(&self, graph: &Graph, source: VertexId) -> Result<bool, Error> {
        detect_arbitrage(graph, source)
    }

    fn has_any_arbitrage(&self, graph: &Graph) -> bool {
        detect_arbitrage_any(graph)
    }
}

/// Detects an arbitrage opportunity (a negative-weight cycle) reachable from `source`.
///
/// # Algorithm
/// 1. `distance[source] = 0`, every other vertex starts at `+inf`.
/// 2. `vertex_count - 1` full passes relax every edge in insertion order.
/// 3. One more pass: if any edge still strictly improves its target, a negative
///    cycle reachable from `source` exists.
///
/// Cycles that `source` cannot reach are not reported; use [`detect_arbitrage_any`]
/// for those.
///
/// # Returns
/// - `Ok(true)` → a profitable conversion loop is reachable from `source`.
/// - `Ok(false)` → none is, or the graph has no vertices at all.
/// - `Err(Error::OutOfRange)` → `source` is not a vertex of a non-empty graph.
pub fn detect_arbitrage(graph: &Graph, source: VertexId) -> Result<bool, Error> {
    let num_vertices = graph.vertex_count();
    if num_vertices == 0 {
        return Ok(false);
    }
    graph.check_vertex(source)?;

    let mut distance = vec![f64::INFINITY; num_vertices];
    distance[source] = 0.0;

    let found = relax_and_check(graph.edges(), &mut distance);

    debug!(
        vertices = num_vertices,
        edges = graph.edge_count(),
        source,
        found,
        "Bellman-Ford detection finished"
    );

    Ok(found)
}

/// Detects a negative-weight cycle anywhere in the graph.
///
/// Equivalent to running [`detect_arbitrage`] from a virtual source joined to every
/// vertex by a zero-weight edge: after that source's first pass every distance is
/// `0.0`, so the search starts there.
pub fn detect_arbitrage_any(graph: &Graph) -> bool {
    let num_vertices = graph.vertex_count();
    if num_vertices == 0 {
        return false;
    }

    let mut distance = vec![0.0; num_vertices];
    let found = relax_and_check(graph.edges(), &mut distance);

    debug!(
        vertices = num_vertices,
        edges = graph.edge_count(),
        found,
        "Super-source detection finished"
    );

    found
}

/// Runs `distance.len() - 1` relaxation passes, then reports whether one more pass
/// would still improve any distance.
fn relax_and_check(edges: &[Edge], distance: &mut [f64]) -> bool {
    for _ in 1..distance.len() {
        for edge in edges {
            if let Some(candidate) = improved_distance(edge, distance) {
                distance[edge.to] = candidate;
            }
        }
    }

    edges
        .iter()
        .any(|edge| improved_distance(edge, distance).is_some())
}

/// Returns `distance[from] + weight` if it is strictly below `distance[to]`.
///
/// Unreached vertices (`+inf`) never relax their neighbours.
#[inline]
fn improved_distance(edge: &Edge, distance: &[f64]) -> Option<f64> {
    let from = distance[edge.from];
    if from == f64::INFINITY {
        return None;
    }

    let candidate = from + edge.weight;
    (candidate < distance[edge.to]).then_some(candidate)
}
