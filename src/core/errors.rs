//! Shared error types for the similarity analysis

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lettergroups operations
#[derive(Debug, Error)]
pub enum Error {
    /// Vectors or matrices whose dimensions do not line up
    #[error("Shape error in {context}: expected {expected}, found {found}")]
    Shape {
        context: String,
        expected: usize,
        found: usize,
    },

    /// NaN or infinite value in an embedding
    #[error("Non-finite value {value} in embedding {index}")]
    NonFinite { index: usize, value: f64 },

    /// Alphabet with no symbols
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// Symbol listed twice in an alphabet definition
    #[error("Duplicate symbol {0:?} in alphabet")]
    DuplicateSymbol(char),

    /// Subset definition mentions a symbol outside the alphabet
    #[error("Symbol {symbol:?} in subset '{subset}' is not part of the alphabet")]
    UnknownSymbol { subset: String, symbol: char },

    /// Cross-subset pair naming a subset that was never defined
    #[error("Unknown subset '{0}'")]
    UnknownSubset(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system related errors
    #[error("File system error at {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a shape error for a named comparison site
    pub fn shape(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::Shape {
            context: context.into(),
            expected,
            found,
        }
    }

    /// Create a file system error with path context
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// True for the errors a caller passed mismatched dimensions for
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
