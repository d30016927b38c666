use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::path::Path;

use super::error::Error;
use common::types::RateQuote;

pub const DEFAULT_CONFIG_PATH: &str = "crates/executor/Config.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct DetectorConfig {
    /// Currency code detection starts from.
    pub source: String,

    /// Also check for cycles unreachable from `source`.
    #[serde(default)]
    pub scan_all_sources: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    pub currencies: Vec<String>,

    #[serde(default)]
    pub rates: Vec<RateQuote>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub detector: DetectorConfig,
    pub market: MarketConfig,
}

/// Loads configuration from `path`, then applies `ARB__`-prefixed environment overrides
/// (e.g. `ARB__DETECTOR__SOURCE=EUR`).
pub fn load_config(path: &Path) -> Result<Config, Error> {
    if !path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("ARB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const MOCK_CONFIG: &str = r#"
[market]
currencies = ["USD", "EUR"]

[[market.rates]]
from = "USD"
to = "EUR"
rate = 0.92

[detector]
source = "EUR"
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write mock config");
        file
    }

    #[test]
    fn test_load_config_success() {
        let file = write_config(MOCK_CONFIG);
        let config = load_config(file.path()).expect("Config should load");

        assert_eq!(config.market.currencies, vec!["USD", "EUR"]);
        assert_eq!(config.market.rates.len(), 1);
        assert_eq!(config.market.rates[0].from, "USD");
        assert_eq!(config.market.rates[0].rate, 0.92);
        assert_eq!(config.detector.source, "EUR");
        assert!(!config.detector.scan_all_sources);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("does_not_exist.toml"));

        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn test_load_config_missing_section() {
        let file = write_config("[market]\ncurrencies = [\"USD\"]\n");
        let result = load_config(file.path());

        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn test_bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Config.toml");
        let config = load_config(&path).expect("Bundled config should load");

        assert_eq!(config.market.currencies.len(), 4);
        assert_eq!(config.market.rates.len(), 4);
        assert_eq!(config.detector.source, "USD");
    }
}
