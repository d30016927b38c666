use common::error::Error;
use common::types::{Edge, VertexId, rate_to_weight};

/// Currency graph: a fixed vertex count and an append-only list of weighted edges.
///
/// - vertices are the ids `0..vertex_count`, one per currency
/// - `edges[i]` is a directed conversion stored as `-ln(rate)`
///
/// Parallel edges between the same pair are kept; each participates in relaxation
/// on its own. Insertion order only affects relaxation order, never the outcome.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph from a vertex count that may come from untyped input.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `vertex_count` is negative or does not fit in `usize`.
    pub fn try_with_vertex_count(vertex_count: i64) -> Result<Self, Error> {
        let count = usize::try_from(vertex_count).map_err(|_| {
            Error::InvalidArgument(format!(
                "vertex count must be non-negative, got {}",
                vertex_count
            ))
        })?;

        Ok(Self::new(count))
    }

    /// Builds a graph from `(from, to, rate)` triples, stopping at the first invalid one.
    pub fn from_rates(
        vertex_count: usize,
        rates: &[(VertexId, VertexId, f64)],
    ) -> Result<Self, Error> {
        let mut graph = Self::new(vertex_count);
        graph.edges.reserve(rates.len());

        for &(from, to, rate) in rates {
            graph.add_edge(from, to, rate)?;
        }

        Ok(graph)
    }

    /// Appends the directed edge `from -> to` with weight `-ln(rate)`.
    ///
    /// Endpoints are checked before the rate. On error the edge list is left untouched.
    ///
    /// # Errors
    /// - `Error::OutOfRange` if `from` or `to` is not in `[0, vertex_count)`.
    /// - `Error::InvalidArgument` if `rate` is zero, negative, NaN or infinite.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, rate: f64) -> Result<(), Error> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let weight = rate_to_weight(rate)?;

        self.edges.push(Edge { from, to, weight });
        Ok(())
    }

    /// Fails with `Error::OutOfRange` unless `vertex` is a valid id for this graph.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<(), Error> {
        if vertex >= self.vertex_count {
            return Err(Error::OutOfRange {
                index: vertex,
                bound: self.vertex_count,
            });
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
