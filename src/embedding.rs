//! Per-symbol embedding vectors

use crate::core::{Error, Result};

/// Ordered embeddings, one per alphabet index, all of one dimension.
///
/// Immutable after construction. Zero-norm rows are accepted and recorded so
/// callers can report them; their similarities are defined as 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingCollection {
    vectors: Vec<Vec<f64>>,
    dimension: usize,
    zero_norm: Vec<usize>,
}

impl EmbeddingCollection {
    pub fn new(vectors: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = vectors.first().map_or(0, Vec::len);

        for (index, vector) in vectors.iter().enumerate() {
            if vector.len() != dimension {
                return Err(Error::shape(
                    format!("embedding {}", index),
                    dimension,
                    vector.len(),
                ));
            }
            if let Some(&value) = vector.iter().find(|v| !v.is_finite()) {
                return Err(Error::NonFinite { index, value });
            }
        }

        let zero_norm: Vec<usize> = vectors
            .iter()
            .enumerate()
            .filter(|(_, v)| v.iter().all(|&x| x == 0.0))
            .map(|(i, _)| i)
            .collect();

        for &index in &zero_norm {
            tracing::warn!(index, "zero-norm embedding; its similarities are reported as 0.0");
        }

        Ok(Self {
            vectors,
            dimension,
            zero_norm,
        })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Hidden-state count N of the upstream model
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.vectors.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.vectors.iter().map(Vec::as_slice)
    }

    /// Indices whose embedding is the zero vector
    pub fn zero_norm_indices(&self) -> &[usize] {
        &self.zero_norm
    }
}
