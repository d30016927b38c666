use async_trait::async_trait;

use super::error::Error;
use super::types::RateSource;
use common::types::RateQuote;

/// Serves the fixed quotes listed under `[market.rates]` in the configuration file.
pub struct ConfigSource {
    quotes: Vec<RateQuote>,
}

impl ConfigSource {
    pub fn new(quotes: Vec<RateQuote>) -> Self {
        ConfigSource { quotes }
    }
}

#[async_trait]
impl RateSource for ConfigSource {
    fn name(&self) -> &'static str {
        "config"
    }

    async fn fetch_quotes(&self) -> Result<Vec<RateQuote>, Error> {
        Ok(self.quotes.clone())
    }
}
