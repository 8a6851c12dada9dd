//! PageRank by power iteration
//!
//! Repeatedly applies the damped transition operator
//!
//! ```text
//! x_{k+1} = (1 - m)·A·x_k  +  spread((1 - m)·D∘x_k)  +  (m / n)·1
//!           [1]               [2]                       [3]
//! ```
//!
//! where `A` is the dense transition matrix, `D` the dangling mask and
//! `spread` hands the total of its argument to every node. The iteration
//! count is a fixed budget; there is no convergence test.

use crate::common::{Graph, NodeIndex};
use crate::error::{check_jump_probability, AlgoResult};
use crate::linalg::{add_matrix_vector, add_vector_scalar, add_vector_vector, mul_vector_vector};
use crate::ranking::{top_k_by, PageRankRank};
use ndarray::Array1;
use std::time::Instant;
use tracing::{debug, info};

/// PageRank configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Probability of a random jump (`m`)
    pub jump_probability: f64,
    /// Number of power iterations
    pub iterations: usize,
    /// Rows reported by [`PageRankResult::top`]
    pub top_k: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            jump_probability: 0.15,
            iterations: 100,
            top_k: 10,
        }
    }
}

/// Final rank vector of a PageRank run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Score per node, indexed by node
    pub scores: Array1<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    top_k: usize,
}

impl PageRankResult {
    /// Get the score for a specific node
    pub fn score(&self, node: NodeIndex) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Get top `k` nodes by score
    pub fn top_k(&self, k: usize) -> Vec<PageRankRank> {
        let entries: Vec<(NodeIndex, f64)> = self.scores.iter().copied().enumerate().collect();
        top_k_by(entries, k, |a, b| a.total_cmp(b))
            .into_iter()
            .enumerate()
            .map(|(i, (node, score))| PageRankRank {
                rank: i + 1,
                node,
                score,
            })
            .collect()
    }

    /// Ranking truncated to the configured `top_k`
    pub fn top(&self) -> Vec<PageRankRank> {
        self.top_k(self.top_k)
    }
}

/// Power-iteration PageRank engine
pub struct PageRank {
    pub config: PageRankConfig,
}

impl PageRank {
    pub fn new(config: PageRankConfig) -> Self {
        Self { config }
    }

    /// Calculate PageRank for the graph
    pub fn run(&self, graph: &Graph) -> AlgoResult<PageRankResult> {
        check_jump_probability(self.config.jump_probability)?;

        let n = graph.size();
        let m = self.config.jump_probability;
        let follow = 1.0 - m;
        let started = Instant::now();

        // 1. Operator terms, built once
        let a = graph.transition_matrix(follow);
        let d = graph.dangling_mask() * follow;
        let uniform_jump = m / n as f64;
        debug!(
            "PageRank operator built for {} nodes ({} dangling)",
            n,
            (0..n).filter(|&i| graph.is_dangling(i)).count()
        );

        // 2. Initialize scores and scratch space
        let mut current = Array1::from_elem(n, 1.0 / n as f64);
        let mut next = Array1::<f64>::zeros(n);
        let mut edge_term = Array1::<f64>::zeros(n);
        let mut dangling_term = Array1::<f64>::zeros(n);
        let mut partial = Array1::<f64>::zeros(n);

        // 3. Iteration
        for _ in 0..self.config.iterations {
            // [1] add_matrix_vector accumulates, so start from zero
            edge_term.fill(0.0);
            add_matrix_vector(&a, &current, &mut edge_term)?;

            // [2]
            mul_vector_vector(&d, &current, &mut dangling_term)?;
            let dangling_mass = dangling_term.sum();
            dangling_term.fill(dangling_mass);
            add_vector_vector(&edge_term, &dangling_term, &mut partial)?;

            // [3]
            add_vector_scalar(&partial, uniform_jump, &mut next)?;

            // Swap buffers
            std::mem::swap(&mut current, &mut next);
        }

        info!(
            "PageRank finished {} iterations over {} nodes in {:?}",
            self.config.iterations,
            n,
            started.elapsed()
        );

        Ok(PageRankResult {
            scores: current,
            iterations: self.config.iterations,
            top_k: self.config.top_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoError;

    const EPS: f64 = 1e-9;

    fn run(graph: &Graph) -> PageRankResult {
        PageRank::new(PageRankConfig::default()).run(graph).unwrap()
    }

    fn position(result: &PageRankResult, node: NodeIndex) -> usize {
        result
            .top_k(result.scores.len())
            .iter()
            .find(|r| r.node == node)
            .map(|r| r.rank)
            .unwrap()
    }

    #[test]
    fn test_single_node() {
        let graph = Graph::new(1).unwrap();
        let result = run(&graph);

        assert!((result.score(0) - 1.0).abs() < EPS);
        assert_eq!(result.top().len(), 1);
    }

    #[test]
    fn test_two_disconnected_nodes() {
        let graph = Graph::new(2).unwrap();
        let result = run(&graph);

        assert!((result.score(0) - 0.5).abs() < EPS);
        assert!((result.score(1) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_four_node_example() {
        // 0 -> 1, 1 -> 2, 2 -> 0, 2 -> 3
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let result = run(&graph);

        assert!(position(&result, 2) < position(&result, 3));
        assert_eq!(result.top()[0].node, 2);
        assert!((result.score(2) - 0.139217).abs() < 1e-5);
        assert!((result.score(1) - 0.119667).abs() < 1e-5);
        // 0 and 3 both receive half of node 2's share plus the jump term
        assert!((result.score(0) - result.score(3)).abs() < EPS);
    }

    #[test]
    fn test_scores_sum_to_one_without_dangling_nodes() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 2)]).unwrap();

        for iterations in [1, 5, 100] {
            let result = PageRank::new(PageRankConfig {
                iterations,
                ..Default::default()
            })
            .run(&graph)
            .unwrap();
            assert!((result.scores.sum() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_isolated_nodes_keep_mass() {
        // Nodes 2 and 3 have neither incoming nor outgoing edges, so both
        // dangling criteria agree and no mass is lost.
        let graph = Graph::from_edges(4, [(0, 1), (1, 0)]).unwrap();
        let result = run(&graph);

        assert!((result.scores.sum() - 1.0).abs() < EPS);
        assert!(result.score(0) > result.score(2));
        assert!((result.score(2) - result.score(3)).abs() < EPS);
    }

    #[test]
    fn test_dangling_term_uses_incoming_edges() {
        // 0 -> 1: node 0 has no incoming edges and is the only node in the
        // dangling mask; node 1 sinks its mass without redistribution.
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let result = run(&graph);

        assert!((result.score(0) - 0.075 / 0.575).abs() < 1e-9);
        assert!((result.score(1) - 0.241304).abs() < 1e-5);
        assert!(result.scores.sum() < 1.0);
    }

    #[test]
    fn test_repeatable() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (2, 0)]).unwrap();
        let first = run(&graph);
        let second = run(&graph);

        assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn test_zero_iterations_is_uniform() {
        let graph = Graph::from_edges(4, [(0, 1)]).unwrap();
        let result = PageRank::new(PageRankConfig {
            iterations: 0,
            ..Default::default()
        })
        .run(&graph)
        .unwrap();

        assert!(result.scores.iter().all(|&s| (s - 0.25).abs() < EPS));
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_top_k_limits_rows() {
        let edges: Vec<(usize, usize)> = (0..20).map(|i| (i, (i + 1) % 20)).collect();
        let graph = Graph::from_edges(20, edges).unwrap();
        let result = run(&graph);

        let top = result.top();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[9].rank, 10);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_invalid_jump_probability() {
        let graph = Graph::new(3).unwrap();
        let err = PageRank::new(PageRankConfig {
            jump_probability: -0.1,
            ..Default::default()
        })
        .run(&graph)
        .unwrap_err();

        assert!(matches!(err, AlgoError::InvalidConfig(_)));
    }
}
