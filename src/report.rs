//! Runs the selected engines over a loaded graph and collects their rankings

use crate::config::RankConfig;
use crate::error::SurfrankResult;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use surfrank_algorithms::{Graph, PageRank, PageRankRank, RandomSurfer, SurferRank};
use tracing::info;

/// Which ranking engines to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    RandomSurfer,
    PageRank,
    Both,
}

impl Engine {
    fn runs_surfer(self) -> bool {
        matches!(self, Engine::RandomSurfer | Engine::Both)
    }

    fn runs_pagerank(self) -> bool {
        matches!(self, Engine::PageRank | Engine::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurferReport {
    pub iterations: usize,
    pub elapsed_ms: u128,
    pub rankings: Vec<SurferRank>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankReport {
    pub iterations: usize,
    pub elapsed_ms: u128,
    pub rankings: Vec<PageRankRank>,
}

/// Output of one ranking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub nodes: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_surfer: Option<SurferReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerank: Option<PageRankReport>,
}

/// Run the chosen engines over `graph`. The graph is only read.
pub fn run_ranking(graph: &Graph, config: &RankConfig, engine: Engine) -> SurfrankResult<RankingReport> {
    config.validate()?;

    let random_surfer = if engine.runs_surfer() {
        let started = Instant::now();
        let result = RandomSurfer::new(config.surfer_config()).run(graph)?;
        Some(SurferReport {
            iterations: result.iterations,
            elapsed_ms: started.elapsed().as_millis(),
            rankings: result.top(),
        })
    } else {
        None
    };

    let pagerank = if engine.runs_pagerank() {
        let started = Instant::now();
        let result = PageRank::new(config.pagerank_config()).run(graph)?;
        Some(PageRankReport {
            iterations: result.iterations,
            elapsed_ms: started.elapsed().as_millis(),
            rankings: result.top(),
        })
    } else {
        None
    };

    info!("Ranking complete ({:?})", engine);

    Ok(RankingReport {
        nodes: graph.size(),
        edges: graph.edge_count(),
        random_surfer,
        pagerank,
    })
}
