pub mod config;
pub mod config_source;
pub mod csv_source;
pub mod error;
pub mod market;
pub mod searcher;
pub mod types;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arb_detector_core::BellmanFord;
use common::types::RateQuote;
use crate::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use config_source::ConfigSource;
use csv_source::CsvSource;
use error::Error;
use market::{CurrencyIndex, build_graph};
use searcher::ArbSearcher;
use types::RateSource;

/// Detect currency arbitrage opportunities with Bellman-Ford.
#[derive(Debug, Parser)]
#[command(name = "arb-detector", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Extra quotes to load from a `from,to,rate` CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Source currency code, overriding `detector.source`.
    #[arg(long)]
    source: Option<String>,

    /// Run detection from every currency and scan for unreachable cycles too.
    #[arg(long)]
    all_sources: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("arb-detector failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = load_config(&cli.config)?;
    info!(path = %cli.config.display(), "Configuration loaded");

    let sources = rate_sources(&cli, &config);
    let quotes = collect_quotes(&sources).await?;

    let index = CurrencyIndex::new(&config.market.currencies)?;
    let graph = build_graph(&index, &quotes)?;
    info!(
        currencies = graph.vertex_count(),
        edges = graph.edge_count(),
        "Currency graph built"
    );

    let searcher = ArbSearcher::new(Arc::new(graph), BellmanFord);

    let search_sources: Vec<String> = if cli.all_sources {
        index.codes().to_vec()
    } else {
        vec![
            cli.source
                .clone()
                .unwrap_or_else(|| config.detector.source.clone()),
        ]
    };

    for outcome in searcher.search_from(&index, &search_sources).await? {
        if outcome.arbitrage {
            info!(source = %outcome.currency, "Arbitrage opportunity detected!");
        } else {
            info!(source = %outcome.currency, "No arbitrage opportunity found.");
        }
    }

    if cli.all_sources || config.detector.scan_all_sources {
        if searcher.search_anywhere().await? {
            info!("Arbitrage opportunity detected somewhere in the graph!");
        } else {
            info!("No arbitrage opportunity anywhere in the graph.");
        }
    }

    Ok(())
}

fn rate_sources(cli: &Cli, config: &Config) -> Vec<Box<dyn RateSource>> {
    let mut sources: Vec<Box<dyn RateSource>> =
        vec![Box::new(ConfigSource::new(config.market.rates.clone()))];

    if let Some(path) = &cli.csv {
        sources.push(Box::new(CsvSource::new(path.clone())));
    }

    sources
}

async fn collect_quotes(sources: &[Box<dyn RateSource>]) -> Result<Vec<RateQuote>, Error> {
    let mut quotes = Vec::new();

    for source in sources {
        let batch = source.fetch_quotes().await?;
        if batch.is_empty() {
            warn!(source = source.name(), "Rate source returned no quotes");
        }
        quotes.extend(batch);
    }

    Ok(quotes)
}
