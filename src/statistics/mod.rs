//! Aggregate similarity statistics over a built matrix
//!
//! All queries read the matrix directly and are independent of clustering.
//! Indices passed in must be `< matrix.size()`; resolve them through
//! [`Alphabet::subset`](crate::alphabet::Alphabet::subset) to guarantee that.

use crate::similarity::SimilarityMatrix;
use serde::Serialize;

/// Default length of the most-similar-pairs listing
pub const DEFAULT_TOP_K: usize = 10;

/// An index pair `i < j` with its similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPair {
    pub i: usize,
    pub j: usize,
    pub similarity: f64,
}

/// Mean similarity over all unordered pairs of distinct members.
///
/// Pairs are taken as `(i, j)` with `i < j` by index value, so the order of
/// `subset` does not matter. Returns `None` when fewer than two members make
/// the average undefined.
pub fn subset_average(matrix: &SimilarityMatrix, subset: &[usize]) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0usize;

    for &i in subset {
        for &j in subset {
            if i < j {
                total += matrix.get(i, j);
                count += 1;
            }
        }
    }

    mean(total, count)
}

/// Mean similarity over the Cartesian product `left × right`.
///
/// Overlapping indices are counted as they occur in the product. Returns
/// `None` if either side is empty.
pub fn cross_subset_average(
    matrix: &SimilarityMatrix,
    left: &[usize],
    right: &[usize],
) -> Option<f64> {
    let total: f64 = left
        .iter()
        .flat_map(|&i| right.iter().map(move |&j| matrix.get(i, j)))
        .sum();

    mean(total, left.len() * right.len())
}

/// The `k` most similar pairs `i < j`, highest first.
///
/// Ties keep enumeration order (`i` ascending, then `j` ascending). Fewer than
/// `k` pairs are returned when the matrix has fewer.
pub fn top_k_pairs(matrix: &SimilarityMatrix, k: usize) -> Vec<RankedPair> {
    let size = matrix.size();
    let mut pairs: Vec<RankedPair> = (0..size)
        .flat_map(|i| {
            ((i + 1)..size).map(move |j| RankedPair {
                i,
                j,
                similarity: matrix.get(i, j),
            })
        })
        .collect();

    // sort_by is stable, which preserves enumeration order among ties
    pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    pairs.truncate(k);
    pairs
}

fn mean(total: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| total / count as f64)
}
