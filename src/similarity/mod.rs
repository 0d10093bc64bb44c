//! Pairwise similarity between symbol embeddings
//!
//! [`cosine_similarity`] compares two vectors; [`SimilarityMatrix`] applies it
//! to every ordered pair of an [`EmbeddingCollection`](crate::embedding::EmbeddingCollection)
//! once, and the result is shared by clustering and statistics.

mod cosine;
mod matrix;

pub use cosine::cosine_similarity;
pub use matrix::SimilarityMatrix;
