//! Monte-Carlo "random surfer" ranking
//!
//! A single long walk over the graph. At every step the surfer either jumps
//! to a uniformly random node (probability `m`, or always when the current
//! node has no outgoing edges) or follows a uniformly chosen outgoing edge.
//! Nodes are ranked by how often the walk stood on them.

use crate::common::{Graph, NodeIndex};
use crate::error::{check_jump_probability, AlgoResult};
use crate::ranking::{top_k_by, SurferRank};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Random surfer configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSurferConfig {
    /// Probability of jumping to a random node instead of following an edge
    pub jump_probability: f64,
    /// Number of walk steps
    pub iterations: usize,
    /// Rows reported by [`SurferResult::top`]
    pub top_k: usize,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for RandomSurferConfig {
    fn default() -> Self {
        Self {
            jump_probability: 0.15,
            iterations: 10_000_000,
            top_k: 10,
            seed: None,
        }
    }
}

/// Next move chosen for the current node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    RandomJump,
    ViaEdge,
}

/// Visit histogram produced by a walk
#[derive(Debug, Clone)]
pub struct SurferResult {
    /// Visits per node; nodes the walk never touched are absent
    pub visits: HashMap<NodeIndex, u64>,
    /// Number of walk steps performed
    pub iterations: usize,
    top_k: usize,
}

impl SurferResult {
    /// Visit count for a node (0 if never visited)
    pub fn visits_of(&self, node: NodeIndex) -> u64 {
        self.visits.get(&node).copied().unwrap_or(0)
    }

    /// Sum of all recorded visits
    pub fn total_visits(&self) -> u64 {
        self.visits.values().sum()
    }

    /// The `k` most visited nodes. Order among equal counts is unspecified.
    pub fn top_k(&self, k: usize) -> Vec<SurferRank> {
        let entries: Vec<(NodeIndex, u64)> = self.visits.iter().map(|(&n, &v)| (n, v)).collect();
        top_k_by(entries, k, |a, b| a.cmp(b))
            .into_iter()
            .enumerate()
            .map(|(i, (node, visits))| SurferRank {
                rank: i + 1,
                node,
                visits,
            })
            .collect()
    }

    /// Ranking truncated to the configured `top_k`
    pub fn top(&self) -> Vec<SurferRank> {
        self.top_k(self.top_k)
    }
}

/// Random surfer engine
pub struct RandomSurfer {
    pub config: RandomSurferConfig,
}

impl RandomSurfer {
    pub fn new(config: RandomSurferConfig) -> Self {
        Self { config }
    }

    /// Run the walk with an RNG derived from the configured seed.
    pub fn run(&self, graph: &Graph) -> AlgoResult<SurferResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(graph, &mut rng)
    }

    /// Run the walk drawing from `rng`.
    pub fn run_with_rng<R: Rng>(&self, graph: &Graph, rng: &mut R) -> AlgoResult<SurferResult> {
        check_jump_probability(self.config.jump_probability)?;

        let n = graph.size();
        let m = self.config.jump_probability;
        let started = Instant::now();

        let mut visits: HashMap<NodeIndex, u64> = HashMap::new();
        let mut current: NodeIndex = rng.gen_range(0..n);
        debug!("Random surfer starting at node {} ({} steps)", current, self.config.iterations);

        for _ in 0..self.config.iterations {
            let edges = graph.successors(current);

            let action = if edges.is_empty() || rng.gen::<f64>() < m {
                Move::RandomJump
            } else {
                Move::ViaEdge
            };

            *visits.entry(current).or_insert(0) += 1;

            current = match action {
                Move::RandomJump => rng.gen_range(0..n),
                Move::ViaEdge => edges[rng.gen_range(0..edges.len())],
            };
        }

        info!(
            "Random surfer finished {} steps over {} nodes in {:?} ({} distinct nodes visited)",
            self.config.iterations,
            n,
            started.elapsed(),
            visits.len()
        );

        Ok(SurferResult {
            visits,
            iterations: self.config.iterations,
            top_k: self.config.top_k,
        })
    }
}
