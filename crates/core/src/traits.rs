use super::graph::Graph;
use common::{error::Error, types::VertexId};

/// Trait for detectors capable of answering "does this currency graph admit arbitrage?".
pub trait ArbitrageDetector {
    /// Detects a negative cycle reachable from `source`.
    ///
    /// Returns `Ok(true)` if one exists, `Ok(false)` if none does,
    /// or `Err(e)` if `source` is not a vertex of `graph`.
    fn has_arbitrage(&self, graph: &Graph, source: VertexId) -> Result<bool, Error>;

    /// Detects a negative cycle anywhere in `graph`, regardless of reachability.
    fn has_any_arbitrage(&self, graph: &Graph) -> bool;
}
