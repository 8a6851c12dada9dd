//! Run configuration
//!
//! Every field has a default matching the reference constants, so a config
//! file only needs to name what it changes:
//!
//! ```yaml
//! jump_probability: 0.2
//! surfer:
//!   iterations: 1000000
//!   seed: 42
//! ```

use crate::error::{SurfrankError, SurfrankResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use surfrank_algorithms::{PageRankConfig, RandomSurferConfig};

/// Random surfer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurferSection {
    /// Number of walk steps
    pub iterations: usize,
    /// Fixed RNG seed for reproducible walks
    pub seed: Option<u64>,
}

impl Default for SurferSection {
    fn default() -> Self {
        Self {
            iterations: 10_000_000,
            seed: None,
        }
    }
}

/// PageRank settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankSection {
    /// Number of power iterations
    pub iterations: usize,
}

impl Default for PageRankSection {
    fn default() -> Self {
        Self { iterations: 100 }
    }
}

/// Configuration shared by both engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping model: probability of jumping to a random node
    pub jump_probability: f64,
    /// Rows reported per engine
    pub top_k: usize,
    pub surfer: SurferSection,
    pub pagerank: PageRankSection,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            jump_probability: 0.15,
            top_k: 10,
            surfer: SurferSection::default(),
            pagerank: PageRankSection::default(),
        }
    }
}

impl RankConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> SurfrankResult<Self> {
        let config: RankConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn load<P: AsRef<Path>>(path: P) -> SurfrankResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> SurfrankResult<()> {
        if !(0.0..=1.0).contains(&self.jump_probability) {
            return Err(SurfrankError::ConfigError(format!(
                "jump_probability must be within [0, 1], got {}",
                self.jump_probability
            )));
        }
        if self.top_k == 0 {
            return Err(SurfrankError::ConfigError(
                "top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn surfer_config(&self) -> RandomSurferConfig {
        RandomSurferConfig {
            jump_probability: self.jump_probability,
            iterations: self.surfer.iterations,
            top_k: self.top_k,
            seed: self.surfer.seed,
        }
    }

    pub fn pagerank_config(&self) -> PageRankConfig {
        PageRankConfig {
            jump_probability: self.jump_probability,
            iterations: self.pagerank.iterations,
            top_k: self.top_k,
        }
    }
}
