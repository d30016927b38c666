pub mod detector;
pub mod graph;
pub mod traits;

pub use detector::{BellmanFord, detect_arbitrage, detect_arbitrage_any};
pub use graph::Graph;
