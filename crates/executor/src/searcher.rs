use std::sync::Arc;
use tracing::{debug, info};

use super::error::Error;
use super::market::CurrencyIndex;
use arb_detector_core::{Graph, traits::ArbitrageDetector};

/// Result of one detection run, keyed by the source currency.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub currency: String,
    pub arbitrage: bool,
}

/// Runs detection over a frozen graph.
///
/// The graph is shared read-only behind an `Arc`, so every search runs on its own
/// blocking task without locking.
pub struct ArbSearcher<D> {
    detector: D,
    graph: Arc<Graph>,
}

impl<D> ArbSearcher<D>
where
    D: ArbitrageDetector + Clone + Send + Sync + 'static,
{
    pub fn new(graph: Arc<Graph>, detector: D) -> Self {
        ArbSearcher { detector, graph }
    }

    /// Runs one detection per source currency, concurrently, and returns the outcomes
    /// in the order the sources were given.
    ///
    /// All codes are resolved before any search starts; an unknown code fails the call.
    pub async fn search_from<S: AsRef<str>>(
        &self,
        index: &CurrencyIndex,
        sources: &[S],
    ) -> Result<Vec<SearchOutcome>, Error> {
        let mut handles = Vec::with_capacity(sources.len());

        for source in sources {
            let id = index.id_of(source.as_ref())?;
            let currency = index.code_of(id).unwrap_or_default().to_string();
            let graph = Arc::clone(&self.graph);
            let detector = self.detector.clone();

            debug!(%currency, vertex = id, "Searcher: scheduling detection");
            let handle = tokio::task::spawn_blocking(move || {
                detector
                    .has_arbitrage(&graph, id)
                    .map(|arbitrage| SearchOutcome { currency, arbitrage })
            });
            handles.push(handle);
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let outcome = handle
                .await
                .map_err(|e| Error::TaskFailed(e.to_string()))??;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Checks the whole graph for a profitable loop, reachable or not.
    pub async fn search_anywhere(&self) -> Result<bool, Error> {
        let graph = Arc::clone(&self.graph);
        let detector = self.detector.clone();

        let found = tokio::task::spawn_blocking(move || detector.has_any_arbitrage(&graph))
            .await
            .map_err(|e| Error::TaskFailed(e.to_string()))?;

        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            found,
            "Searcher: whole-graph scan complete"
        );
        Ok(found)
    }
}
