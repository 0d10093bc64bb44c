use super::cosine::cosine_similarity;
use crate::core::{Error, Result};
use crate::embedding::EmbeddingCollection;

/// Square matrix of pairwise cosine similarities, row-major.
///
/// Entry `(i, j)` compares embedding `i` with embedding `j`. Every ordered
/// pair is computed, so the matrix is symmetric with 1.0 on the diagonal
/// except for zero-norm embeddings, whose row and column are all 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the full matrix for an embedding collection
    pub fn build(embeddings: &EmbeddingCollection) -> Result<Self> {
        let size = embeddings.len();
        let _span = tracing::debug_span!("similarity_matrix", size, dimension = embeddings.dimension())
            .entered();

        let mut values = Vec::with_capacity(size * size);
        for a in embeddings.iter() {
            for b in embeddings.iter() {
                values.push(cosine_similarity(a, b)?);
            }
        }

        Ok(Self { size, values })
    }

    /// Wrap precomputed similarities; rows must form a square matrix
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::shape(
                    format!("similarity matrix row {}", i),
                    size,
                    row.len(),
                ));
            }
            values.extend(row);
        }
        Ok(Self { size, values })
    }

    /// Number of items M
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of items `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.size && j < self.size,
            "index ({i}, {j}) out of bounds for {0}x{0} similarity matrix",
            self.size
        );
        self.values[i * self.size + j]
    }

    /// Checked variant of [`get`](Self::get)
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.size && j < self.size).then(|| self.values[i * self.size + j])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.size).then(|| &self.values[i * self.size..(i + 1) * self.size])
    }
}
