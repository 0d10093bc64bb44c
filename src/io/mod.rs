pub mod input;
pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use input::{embeddings_from_emission, read_emission_file, EmissionFile};
pub use output::{create_writer, OutputFormat, OutputWriter};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
