//! Threshold grouping of alphabet symbols
//!
//! Symbols are partitioned with a single greedy pass over the similarity
//! matrix. Each group is anchored on its seed: a candidate joins when its
//! similarity to the seed reaches the threshold, regardless of how similar it
//! is to the other members. Groups are therefore not transitive, and this is
//! not agglomerative clustering.

mod threshold;

pub use threshold::{Group, ThresholdClusterer};

/// Threshold used by the reference analysis
pub const DEFAULT_THRESHOLD: f64 = 0.65;
