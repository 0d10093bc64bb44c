//! Seed-anchored single-pass clustering

use crate::similarity::SimilarityMatrix;
use serde::Serialize;

/// A group of item indices and the seed that formed it.
///
/// `members` is in ascending index order and always starts with `seed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub seed: usize,
    pub members: Vec<usize>,
}

impl Group {
    fn seeded(seed: usize) -> Self {
        Self {
            seed,
            members: vec![seed],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }
}

/// Greedy clusterer with an inclusive similarity threshold.
///
/// Any threshold value is accepted: above 1.0 every item is a singleton, at
/// or below -1.0 everything joins the first seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdClusterer {
    threshold: f64,
}

impl ThresholdClusterer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Partition `0..matrix.size()` into groups.
    ///
    /// Seeds are taken in ascending index order; each seed claims every later
    /// unvisited index `j` with `S[seed][j] >= threshold`. Output order
    /// follows seed order.
    pub fn cluster(&self, matrix: &SimilarityMatrix) -> Vec<Group> {
        let size = matrix.size();
        let mut visited = vec![false; size];
        let mut groups = Vec::new();

        for seed in 0..size {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;

            let mut group = Group::seeded(seed);
            for candidate in (seed + 1)..size {
                if !visited[candidate] && matrix.get(seed, candidate) >= self.threshold {
                    visited[candidate] = true;
                    group.members.push(candidate);
                }
            }
            groups.push(group);
        }

        tracing::debug!(
            threshold = self.threshold,
            items = size,
            groups = groups.len(),
            "threshold clustering complete"
        );
        groups
    }
}

impl Default for ThresholdClusterer {
    fn default() -> Self {
        Self::new(super::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a, b, c, d with S[a][b]=0.9, S[a][c]=0.4, S[a][d]=0.9,
    /// S[b][c]=0.1, S[b][d]=0.95, S[c][d]=0.2
    fn four_symbol_matrix() -> SimilarityMatrix {
        SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.4, 0.9],
            vec![0.9, 1.0, 0.1, 0.95],
            vec![0.4, 0.1, 1.0, 0.2],
            vec![0.9, 0.95, 0.2, 1.0],
        ])
        .unwrap()
    }

    fn members(groups: &[Group]) -> Vec<Vec<usize>> {
        groups.iter().map(|g| g.members.clone()).collect()
    }

    #[test]
    fn test_seed_pulls_in_members_above_threshold() {
        let groups = ThresholdClusterer::new(0.65).cluster(&four_symbol_matrix());
        assert_eq!(members(&groups), vec![vec![0, 1, 3], vec![2]]);
        assert_eq!(groups[0].seed, 0);
        assert_eq!(groups[1].seed, 2);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let groups = ThresholdClusterer::new(0.9).cluster(&four_symbol_matrix());
        assert_eq!(members(&groups), vec![vec![0, 1, 3], vec![2]]);

        let groups = ThresholdClusterer::new(0.900_001).cluster(&four_symbol_matrix());
        assert_eq!(members(&groups), vec![vec![0], vec![1, 3], vec![2]]);
    }

    #[test]
    fn test_membership_not_transitive() {
        // b and c are both close to a but far from each other
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.8, 0.8],
            vec![0.8, 1.0, -0.5],
            vec![0.8, -0.5, 1.0],
        ])
        .unwrap();
        let groups = ThresholdClusterer::new(0.7).cluster(&matrix);
        assert_eq!(members(&groups), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_extreme_thresholds() {
        let matrix = four_symbol_matrix();

        let singletons = ThresholdClusterer::new(1.5).cluster(&matrix);
        assert_eq!(singletons.len(), 4);
        assert!(singletons.iter().all(|g| g.len() == 1));

        let one_group = ThresholdClusterer::new(-1.0).cluster(&matrix);
        assert_eq!(members(&one_group), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_lower_threshold_can_yield_more_groups() {
        // Seed 0 claiming 1 at the lower threshold leaves 2 and 3 unanchored
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.8, 0.1, 0.1],
            vec![0.8, 1.0, 0.9, 0.9],
            vec![0.1, 0.9, 1.0, 0.1],
            vec![0.1, 0.9, 0.1, 1.0],
        ])
        .unwrap();

        let high = ThresholdClusterer::new(0.85).cluster(&matrix);
        assert_eq!(members(&high), vec![vec![0], vec![1, 2, 3]]);

        let low = ThresholdClusterer::new(0.75).cluster(&matrix);
        assert_eq!(members(&low), vec![vec![0, 1], vec![2], vec![3]]);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::from_rows(Vec::new()).unwrap();
        assert!(ThresholdClusterer::default().cluster(&matrix).is_empty());
    }
}
