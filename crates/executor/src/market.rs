use std::collections::HashMap;

use super::error::Error;
use arb_detector_core::Graph;
use common::types::{RateQuote, VertexId};

/// Maps currency codes to graph vertex ids, in the order the currencies were listed.
#[derive(Debug, Clone)]
pub struct CurrencyIndex {
    codes: Vec<String>,
    ids: HashMap<String, VertexId>,
}

impl CurrencyIndex {
    /// Codes are compared case-insensitively and stored upper-cased.
    ///
    /// # Errors
    /// Returns `Error::DuplicateCurrency` if a code appears twice.
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Result<Self, Error> {
        let mut index = CurrencyIndex {
            codes: Vec::with_capacity(codes.len()),
            ids: HashMap::with_capacity(codes.len()),
        };

        for code in codes {
            let code = normalize(code.as_ref());
            if index.ids.contains_key(&code) {
                return Err(Error::DuplicateCurrency(code));
            }
            index.ids.insert(code.clone(), index.codes.len());
            index.codes.push(code);
        }

        Ok(index)
    }

    pub fn id_of(&self, code: &str) -> Result<VertexId, Error> {
        let code = normalize(code);
        self.ids
            .get(&code)
            .copied()
            .ok_or(Error::UnknownCurrency(code))
    }

    pub fn code_of(&self, id: VertexId) -> Option<&str> {
        self.codes.get(id).map(String::as_str)
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Builds the currency graph: one vertex per indexed currency, one edge per quote.
///
/// # Errors
/// - `Error::UnknownCurrency` if a quote names a currency missing from `index`.
/// - `Error::GraphError` if a quote carries an invalid rate.
pub fn build_graph(index: &CurrencyIndex, quotes: &[RateQuote]) -> Result<Graph, Error> {
    let mut graph = Graph::new(index.len());

    for quote in quotes {
        let from = index.id_of(&quote.from)?;
        let to = index.id_of(&quote.to)?;
        graph.add_edge(from, to, quote.rate)?;
    }

    Ok(graph)
}
