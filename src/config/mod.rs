//! Analysis configuration
//!
//! Threshold, report length and the named symbol subsets are caller-supplied
//! values. They come from `.lettergroups.toml` (or an explicit path) and can
//! be overridden on the command line.

mod loader;

pub use loader::{load_config, parse_config, CONFIG_FILE_NAME};

use crate::alphabet::{Alphabet, SymbolSubset};
use crate::clustering::DEFAULT_THRESHOLD;
use crate::core::{Error, Result};
use crate::statistics::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named set of symbols whose internal similarity is reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetConfig {
    pub name: String,
    pub symbols: String,
}

impl SubsetConfig {
    pub fn new(name: impl Into<String>, symbols: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into(),
        }
    }
}

/// Two subsets whose cross similarity is reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossSubsetConfig {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Inclusive similarity threshold for joining a seed's group
    pub threshold: f64,
    /// Number of most similar pairs to report
    pub top_k: usize,
    pub subsets: Vec<SubsetConfig>,
    pub cross_subsets: Vec<CrossSubsetConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            subsets: vec![
                SubsetConfig::new("vowels", "aeiou"),
                SubsetConfig::new("consonants", "bcdfghjklmnpqrstvwxyz"),
            ],
            cross_subsets: vec![CrossSubsetConfig {
                left: "vowels".to_string(),
                right: "consonants".to_string(),
            }],
        }
    }
}

impl AnalysisConfig {
    /// Apply command line overrides
    pub fn with_overrides(mut self, threshold: Option<f64>, top_k: Option<usize>) -> Self {
        if let Some(threshold) = threshold {
            self.threshold = threshold;
        }
        if let Some(top_k) = top_k {
            self.top_k = top_k;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() {
            return Err(Error::Config("threshold must be a number".to_string()));
        }
        if !(-1.0..=1.0).contains(&self.threshold) {
            log::debug!(
                "Threshold {} is outside [-1, 1]; groups will be all singletons or one group",
                self.threshold
            );
        }

        let mut seen = HashSet::new();
        for subset in &self.subsets {
            if !seen.insert(subset.name.as_str()) {
                return Err(Error::Config(format!(
                    "subset '{}' is defined more than once",
                    subset.name
                )));
            }
        }

        for cross in &self.cross_subsets {
            for name in [&cross.left, &cross.right] {
                if !seen.contains(name.as_str()) {
                    return Err(Error::UnknownSubset(name.clone()));
                }
            }
        }

        Ok(())
    }

    /// Resolve every configured subset against the alphabet
    pub fn resolve_subsets(&self, alphabet: &Alphabet) -> Result<Vec<SymbolSubset>> {
        self.subsets
            .iter()
            .map(|s| alphabet.subset(&s.name, &s.symbols))
            .collect()
    }
}
