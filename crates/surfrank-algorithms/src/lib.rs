//! Node-importance ranking for directed graphs
//!
//! Two engines share one [`Graph`] and one damping model (probability `m` of
//! jumping to a uniformly random node):
//! - [`RandomSurfer`]: Monte-Carlo walk, nodes ranked by visit frequency
//! - [`PageRank`]: deterministic power iteration over a dense operator

pub mod common;
pub mod error;
pub mod linalg;
pub mod pagerank;
pub mod random_surfer;
pub mod ranking;

pub use common::{Graph, Node, NodeIndex};
pub use error::{AlgoError, AlgoResult};
pub use pagerank::{PageRank, PageRankConfig, PageRankResult};
pub use random_surfer::{RandomSurfer, RandomSurferConfig, SurferResult};
pub use ranking::{PageRankRank, SurferRank};
