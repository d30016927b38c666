use serde::Deserialize;

use super::error::Error;

/// Identity of a currency inside a graph: its index in `[0, vertex_count)`.
pub type VertexId = usize;

/// A directed conversion `from -> to`, stored as the additive weight `-ln(rate)`.
///
/// Rates compose multiplicatively along a conversion path. Storing `-ln(rate)`
/// turns that product into a sum, so a loop whose rates multiply to more than
/// `1.0` becomes a cycle whose weights sum to less than `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    /// Returns the exchange rate this edge was built from (`e^(-weight)`).
    pub fn rate(&self) -> f64 {
        weight_to_rate(self.weight)
    }
}

/// Converts a multiplicative exchange rate into an additive edge weight.
///
/// # Errors
/// Returns `Error::InvalidArgument` when `rate` is not finite or not strictly positive,
/// since `-ln(rate)` would be `NaN` or infinite.
pub fn rate_to_weight(rate: f64) -> Result<f64, Error> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "exchange rate must be finite and strictly positive, got {}",
            rate
        )));
    }

    Ok(-rate.ln())
}

/// Inverse of [`rate_to_weight`].
pub fn weight_to_rate(weight: f64) -> f64 {
    (-weight).exp()
}

/// An exchange rate keyed by currency codes, as read from configuration or a CSV file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateQuote {
    pub from: String,
    pub to: String,
    pub rate: f64,
}
