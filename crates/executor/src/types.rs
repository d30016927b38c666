use super::error::Error;
use common::types::RateQuote;

/// A trait defining the contract for any source of exchange-rate quotes
/// feeding the graph builder.
///
/// The caller only needs the quotes; where they come from (the configuration
/// file, a CSV export) stays behind this trait.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Short label used in log output.
    fn name(&self) -> &'static str;

    async fn fetch_quotes(&self) -> Result<Vec<RateQuote>, Error>;
}
