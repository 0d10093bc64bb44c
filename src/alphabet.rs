//! Symbol alphabet shared by every analysis component
//!
//! The alphabet fixes the index order of embeddings, matrix rows and group
//! members. It is built once and passed explicitly; nothing in the crate keeps
//! a global symbol table.

use crate::core::{Error, Result};
use std::collections::HashMap;

/// Lowercase English letters followed by space
pub const ENGLISH_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz ";

/// Ordered, duplicate-free set of symbols with index lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i).is_some() {
                return Err(Error::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols, index })
    }

    /// The 27-symbol alphabet the binary analyzes: `a`..`z` then space
    pub fn english() -> Self {
        let symbols: Vec<char> = ENGLISH_SYMBOLS.chars().collect();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, index }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Resolve a string of symbols into a named index subset.
    ///
    /// Order of `symbols` is preserved; a symbol outside the alphabet is an
    /// error rather than being dropped.
    pub fn subset(&self, name: &str, symbols: &str) -> Result<SymbolSubset> {
        let indices = symbols
            .chars()
            .map(|symbol| {
                self.index_of(symbol).ok_or_else(|| Error::UnknownSymbol {
                    subset: name.to_string(),
                    symbol,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SymbolSubset {
            name: name.to_string(),
            indices,
        })
    }

    /// Map indices back to symbols, skipping anything out of range
    pub fn symbols_for(&self, indices: &[usize]) -> Vec<char> {
        indices.iter().filter_map(|&i| self.symbol(i)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

/// A caller-named group of alphabet indices, e.g. "vowels"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSubset {
    pub name: String,
    pub indices: Vec<usize>,
}
