use crate::alphabet::Alphabet;
use crate::config::{load_config, AnalysisConfig};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, embeddings_from_emission, read_emission_file, OutputFormat};
use crate::report::{analyze, AnalysisReport};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub inputs: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub top: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let analysis_config = load_config(config.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(config.threshold, config.top);
    analysis_config.validate()?;

    let alphabet = Alphabet::english();
    let reports = config
        .inputs
        .iter()
        .map(|path| analyze_file(path, &alphabet, &analysis_config))
        .collect::<Result<Vec<_>>>()?;

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_reports(BufWriter::new(file), &config, &reports)
        }
        None => write_reports(std::io::stdout().lock(), &config, &reports),
    }
}

/// Analyze one emission matrix file with the fixed alphabet
pub fn analyze_file(
    path: &Path,
    alphabet: &Alphabet,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    let input = read_emission_file(path)
        .with_context(|| format!("Failed to read emission matrix {}", path.display()))?;
    let embeddings = embeddings_from_emission(input.emission(), alphabet)
        .with_context(|| format!("Invalid emission matrix in {}", path.display()))?;

    let label = input
        .label()
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());

    Ok(analyze(&embeddings, alphabet, config)?.with_label(label))
}

fn write_reports<W: Write>(
    mut writer: W,
    config: &AnalyzeConfig,
    reports: &[AnalysisReport],
) -> Result<()> {
    create_writer(config.format, &mut writer, config.formatting).write_reports(reports)?;
    writer.flush()?;
    Ok(())
}
