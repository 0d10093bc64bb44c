//! Emission matrix input
//!
//! The trainer hands over an N×M emission matrix: one row per hidden state,
//! one column per alphabet symbol. Transposing it into per-symbol embeddings
//! happens here, at the edge, so the core only ever sees embeddings.

use crate::alphabet::Alphabet;
use crate::core::{Error, Result};
use crate::embedding::EmbeddingCollection;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// JSON input: either a bare matrix or a labeled object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EmissionFile {
    Bare(Vec<Vec<f64>>),
    Labeled {
        #[serde(default)]
        label: Option<String>,
        emission: Vec<Vec<f64>>,
    },
}

impl EmissionFile {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Labeled { label, .. } => label.as_deref(),
            Self::Bare(_) => None,
        }
    }

    pub fn emission(&self) -> &[Vec<f64>] {
        match self {
            Self::Labeled { emission, .. } => emission,
            Self::Bare(emission) => emission,
        }
    }
}

pub fn parse_emission(contents: &str) -> Result<EmissionFile> {
    Ok(serde_json::from_str(contents)?)
}

pub fn read_emission_file(path: &Path) -> Result<EmissionFile> {
    let contents = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    parse_emission(&contents)
}

/// Transpose an N×M emission matrix into M embeddings of dimension N.
///
/// Every row must have one column per alphabet symbol. Rows that are not
/// probability distributions are logged but accepted.
pub fn embeddings_from_emission(
    emission: &[Vec<f64>],
    alphabet: &Alphabet,
) -> Result<EmbeddingCollection> {
    let symbols = alphabet.len();

    for (state, row) in emission.iter().enumerate() {
        if row.len() != symbols {
            return Err(Error::shape(
                format!("emission row {}", state),
                symbols,
                row.len(),
            ));
        }
        check_distribution(state, row);
    }

    let embeddings = (0..symbols)
        .map(|symbol| emission.iter().map(|row| row[symbol]).collect())
        .collect();

    EmbeddingCollection::new(embeddings)
}

fn check_distribution(state: usize, row: &[f64]) {
    if row.iter().any(|&p| p < 0.0) {
        tracing::warn!(state, "emission row contains negative probabilities");
    }
    let sum: f64 = row.iter().sum();
    if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
        tracing::warn!(state, sum, "emission row does not sum to 1");
    }
}
