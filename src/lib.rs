//! Discover symbol groupings from per-symbol embeddings.
//!
//! Embeddings (typically the columns of a trained HMM's emission matrix) are
//! compared pairwise by cosine similarity. The resulting matrix drives a
//! seed-anchored threshold clustering and a set of aggregate statistics:
//! subset averages, cross-subset averages and the most similar pairs.
//!
//! ```
//! use lettergroups::{Alphabet, EmbeddingCollection, SimilarityMatrix, ThresholdClusterer};
//!
//! let alphabet = Alphabet::new("abc").unwrap();
//! let embeddings = EmbeddingCollection::new(vec![
//!     vec![0.9, 0.1],
//!     vec![0.1, 0.9],
//!     vec![0.8, 0.2],
//! ])
//! .unwrap();
//!
//! let matrix = SimilarityMatrix::build(&embeddings).unwrap();
//! let groups = ThresholdClusterer::new(0.9).cluster(&matrix);
//!
//! assert_eq!(alphabet.symbols_for(&groups[0].members), vec!['a', 'c']);
//! ```

pub mod alphabet;
pub mod cli;
pub mod clustering;
pub mod commands;
pub mod config;
pub mod core;
pub mod embedding;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod report;
pub mod similarity;
pub mod statistics;

// Re-export commonly used types
pub use crate::alphabet::{Alphabet, SymbolSubset};
pub use crate::clustering::{Group, ThresholdClusterer};
pub use crate::config::AnalysisConfig;
pub use crate::core::{Error, Result};
pub use crate::embedding::EmbeddingCollection;
pub use crate::report::{analyze, AnalysisReport, SubsetSimilaritySummary};
pub use crate::similarity::{cosine_similarity, SimilarityMatrix};
pub use crate::statistics::{cross_subset_average, subset_average, top_k_pairs, RankedPair};
