//! Surfrank
//!
//! Estimates node importance in a directed graph with a Monte-Carlo random
//! surfer and a power-iteration PageRank solver. The engines live in the
//! `surfrank-algorithms` crate; this crate adds the graph-file loader, the
//! run configuration and report assembly used by the CLI.

pub mod config;
pub mod error;
pub mod loader;
pub mod report;

pub use config::{PageRankSection, RankConfig, SurferSection};
pub use error::{SurfrankError, SurfrankResult};
pub use loader::{load_graph, parse_graph, LoadError};
pub use report::{run_ranking, Engine, PageRankReport, RankingReport, SurferReport};

pub use surfrank_algorithms as algo;
pub use surfrank_algorithms::{Graph, PageRank, PageRankConfig, RandomSurfer, RandomSurferConfig};

/// Version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
