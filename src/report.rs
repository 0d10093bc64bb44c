//! Analysis run over one embedding collection
//!
//! [`analyze`] builds the similarity matrix once, groups the symbols and
//! computes every configured statistic from that same matrix. The resulting
//! [`AnalysisReport`] carries symbols rather than indices so writers need no
//! alphabet of their own.

use crate::alphabet::{Alphabet, SymbolSubset};
use crate::clustering::ThresholdClusterer;
use crate::config::AnalysisConfig;
use crate::core::{Error, Result};
use crate::embedding::EmbeddingCollection;
use crate::similarity::SimilarityMatrix;
use crate::statistics::{cross_subset_average, subset_average, top_k_pairs};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    /// 1-based position in seed order
    pub number: usize,
    pub seed: char,
    pub symbols: Vec<char>,
}

/// Mean internal similarity of a named subset; `None` when undefined
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsetSimilaritySummary {
    pub name: String,
    pub symbols: Vec<char>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSubsetSummary {
    pub left: String,
    pub right: String,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairReport {
    pub left: char,
    pub right: char,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub hidden_states: usize,
    pub threshold: f64,
    pub groups: Vec<GroupReport>,
    pub subsets: Vec<SubsetSimilaritySummary>,
    pub cross_subsets: Vec<CrossSubsetSummary>,
    pub top_pairs: Vec<PairReport>,
    pub zero_norm_symbols: Vec<char>,
}

impl AnalysisReport {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Run grouping and statistics for one embedding collection
pub fn analyze(
    embeddings: &EmbeddingCollection,
    alphabet: &Alphabet,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    if embeddings.len() != alphabet.len() {
        return Err(Error::shape(
            "embeddings per alphabet symbol",
            alphabet.len(),
            embeddings.len(),
        ));
    }
    config.validate()?;
    let subsets = config.resolve_subsets(alphabet)?;

    let _span = tracing::info_span!("analyze", hidden_states = embeddings.dimension()).entered();

    let matrix = SimilarityMatrix::build(embeddings)?;
    let groups = ThresholdClusterer::new(config.threshold).cluster(&matrix);

    let subset_summaries: Vec<SubsetSimilaritySummary> = subsets
        .iter()
        .map(|subset| SubsetSimilaritySummary {
            name: subset.name.clone(),
            symbols: alphabet.symbols_for(&subset.indices),
            average: subset_average(&matrix, &subset.indices),
        })
        .collect();

    let cross_summaries = config
        .cross_subsets
        .iter()
        .map(|cross| {
            let left = find_subset(&subsets, &cross.left)?;
            let right = find_subset(&subsets, &cross.right)?;
            Ok(CrossSubsetSummary {
                left: cross.left.clone(),
                right: cross.right.clone(),
                average: cross_subset_average(&matrix, left, right),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let top_pairs = top_k_pairs(&matrix, config.top_k)
        .into_iter()
        .map(|pair| PairReport {
            left: alphabet.symbols()[pair.i],
            right: alphabet.symbols()[pair.j],
            similarity: pair.similarity,
        })
        .collect();

    let groups: Vec<GroupReport> = groups
        .into_iter()
        .enumerate()
        .map(|(n, group)| GroupReport {
            number: n + 1,
            seed: alphabet.symbols()[group.seed],
            symbols: alphabet.symbols_for(&group.members),
        })
        .collect();

    tracing::info!(groups = groups.len(), "analysis complete");

    Ok(AnalysisReport {
        label: None,
        hidden_states: embeddings.dimension(),
        threshold: config.threshold,
        groups,
        subsets: subset_summaries,
        cross_subsets: cross_summaries,
        top_pairs,
        zero_norm_symbols: alphabet.symbols_for(embeddings.zero_norm_indices()),
    })
}

fn find_subset<'a>(subsets: &'a [SymbolSubset], name: &str) -> Result<&'a [usize]> {
    subsets
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.indices.as_slice())
        .ok_or_else(|| Error::UnknownSubset(name.to_string()))
}
