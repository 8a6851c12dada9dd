//! Shared graph representation for the ranking engines
//!
//! A dense, integer-indexed directed graph. Nodes are addressed by their
//! position `0..size`; there is no separate identity. Both forward and
//! reverse adjacency are kept so each engine can pick the relation it needs.

use crate::error::{AlgoError, AlgoResult};
use ndarray::{Array1, Array2};

/// Node index type
pub type NodeIndex = usize;

/// Adjacency of a single node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Targets of outgoing edges, in insertion order
    pub out_edges: Vec<NodeIndex>,
    /// Sources of incoming edges, in insertion order
    pub in_edges: Vec<NodeIndex>,
    /// Number of outgoing edges (branching factor)
    pub out_degree: usize,
}

/// Directed graph with a fixed node count.
///
/// Self-loops and parallel edges are allowed. The graph only grows through
/// [`Graph::add_edge`]; its size never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `size` nodes and no edges.
    pub fn new(size: usize) -> AlgoResult<Self> {
        if size == 0 {
            return Err(AlgoError::InvalidGraph(
                "graph must contain at least one node".to_string(),
            ));
        }

        let mut nodes = Vec::new();
        nodes.try_reserve_exact(size).map_err(|e| {
            AlgoError::InvalidGraph(format!("cannot allocate {} nodes: {}", size, e))
        })?;
        nodes.resize(size, Node::default());

        Ok(Self { nodes, edge_count: 0 })
    }

    /// Build a graph from an edge list
    pub fn from_edges<I>(size: usize, edges: I) -> AlgoResult<Self>
    where
        I: IntoIterator<Item = (NodeIndex, NodeIndex)>,
    {
        let mut graph = Self::new(size)?;
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Add the directed edge `from -> to`.
    ///
    /// Both endpoints are checked before anything is mutated, so a rejected
    /// edge leaves the graph unchanged.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> AlgoResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        self.nodes[from].out_edges.push(to);
        self.nodes[to].in_edges.push(from);
        self.nodes[from].out_degree += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges added so far (parallel edges counted separately)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the out-degree of a node
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.nodes[idx].out_degree
    }

    /// Get the in-degree of a node
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.nodes[idx].in_edges.len()
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.nodes[idx].out_edges
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.nodes[idx].in_edges
    }

    /// Dangling in the PageRank sense: the node has no incoming edges.
    pub fn is_dangling(&self, idx: NodeIndex) -> bool {
        self.nodes[idx].in_edges.is_empty()
    }

    /// Dangling in the random-surfer sense: there is no edge to follow.
    pub fn has_no_out_edges(&self, idx: NodeIndex) -> bool {
        self.nodes[idx].out_edges.is_empty()
    }

    /// Vector holding `1/size` for every node without incoming edges and
    /// `0` elsewhere.
    pub fn dangling_mask(&self) -> Array1<f64> {
        let val = 1.0 / self.size() as f64;
        Array1::from_iter(
            (0..self.size()).map(|i| if self.is_dangling(i) { val } else { 0.0 }),
        )
    }

    /// Dense transition matrix with `A[v][u] = factor / out_degree(u)` for
    /// every edge `u -> v`.
    ///
    /// Parallel edges accumulate, so the column of any node with outgoing
    /// edges sums to `factor`.
    pub fn transition_matrix(&self, factor: f64) -> Array2<f64> {
        let n = self.size();
        let mut a = Array2::<f64>::zeros((n, n));

        for (u, node) in self.nodes.iter().enumerate() {
            if node.out_degree == 0 {
                continue;
            }
            let share = (1.0 / node.out_degree as f64) * factor;
            for &v in &node.out_edges {
                a[[v, u]] += share;
            }
        }

        a
    }

    fn check_index(&self, idx: NodeIndex) -> AlgoResult<()> {
        if idx >= self.size() {
            return Err(AlgoError::IndexOutOfRange {
                index: idx,
                size: self.size(),
            });
        }
        Ok(())
    }
}
