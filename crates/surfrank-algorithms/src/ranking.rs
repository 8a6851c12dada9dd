//! Ranked result rows shared by both engines

use crate::common::NodeIndex;
use std::cmp::Ordering;

/// One row of a random-surfer ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurferRank {
    /// 1-based position
    pub rank: usize,
    pub node: NodeIndex,
    pub visits: u64,
}

/// One row of a PageRank ranking
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankRank {
    /// 1-based position
    pub rank: usize,
    pub node: NodeIndex,
    pub score: f64,
}

/// Sort `(node, value)` pairs by descending value and keep the first `k`.
///
/// Equal values fall back to ascending node index so repeated runs print the
/// same table; callers should not treat that order as meaningful.
pub(crate) fn top_k_by<T, F>(mut entries: Vec<(NodeIndex, T)>, k: usize, cmp: F) -> Vec<(NodeIndex, T)>
where
    F: Fn(&T, &T) -> Ordering,
{
    entries.sort_by(|a, b| cmp(&b.1, &a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}
