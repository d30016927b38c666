use async_trait::async_trait;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::PathBuf;
use tracing::{error, info};

use super::error::Error;
use super::types::RateSource;
use common::types::RateQuote;

/// Reads quotes from a CSV file with a `from,to,rate` header, codes in the first two columns.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvSource { path: path.into() }
    }

    fn parse_csv_to_quotes(&self) -> Result<Vec<RateQuote>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = ?e, "Failed to read rate file");
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut quotes = Vec::new();

        for result in rdr.deserialize() {
            let quote: RateQuote = result?;
            quotes.push(quote);
        }
        Ok(quotes)
    }
}

#[async_trait]
impl RateSource for CsvSource {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn fetch_quotes(&self) -> Result<Vec<RateQuote>, Error> {
        let quotes = self.parse_csv_to_quotes()?;
        info!(
            path = %self.path.display(),
            count = quotes.len(),
            "CsvSource: loaded quotes"
        );
        Ok(quotes)
    }
}
