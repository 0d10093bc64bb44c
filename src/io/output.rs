use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use crate::report::AnalysisReport;
use std::io::Write;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_banner(report)?;
        self.write_groups(report)?;
        self.write_averages(report)?;
        self.write_top_pairs(report)?;
        Ok(())
    }

    fn write_banner(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let title = format!("Results for N={} hidden states", report.hidden_states);
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", rule)?;
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        if let Some(label) = &report.label {
            writeln!(self.writer, "{}", self.formatter.dim(&format!("Input: {}", label)))?;
        }
        writeln!(self.writer, "{}", rule)?;
        Ok(())
    }

    fn write_groups(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        let heading = format!("Letter groupings (threshold={}):", report.threshold);
        writeln!(self.writer, "{}", self.formatter.bold(&heading))?;
        for group in &report.groups {
            writeln!(self.writer, "Group {}: {:?}", group.number, group.symbols)?;
        }
        if !report.zero_norm_symbols.is_empty() {
            let note = format!(
                "Zero-norm embeddings (similarity reported as 0.0): {:?}",
                report.zero_norm_symbols
            );
            writeln!(self.writer, "{}", self.formatter.dim(&note))?;
        }
        Ok(())
    }

    fn write_averages(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        for subset in &report.subsets {
            // Undefined averages (fewer than two members) are omitted
            if let Some(average) = subset.average {
                writeln!(
                    self.writer,
                    "Average similarity within {} ({}): {:.4}",
                    subset.name,
                    join_symbols(&subset.symbols),
                    average
                )?;
            }
        }
        for cross in &report.cross_subsets {
            if let Some(average) = cross.average {
                writeln!(
                    self.writer,
                    "Average similarity between {} and {}: {:.4}",
                    cross.left, cross.right, average
                )?;
            }
        }
        Ok(())
    }

    fn write_top_pairs(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        let heading = format!("Top {} most similar letter pairs:", report.top_pairs.len());
        writeln!(self.writer, "{}", self.formatter.bold(&heading))?;
        for pair in &report.top_pairs {
            writeln!(
                self.writer,
                "  {} - {}: {:.4}",
                pair.left, pair.right, pair.similarity
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[AnalysisReport]) -> anyhow::Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        Ok(())
    }
}

fn join_symbols(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            writer,
            Box::new(ColoredFormatter::new(formatting)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainFormatter;
    use crate::report::{CrossSubsetSummary, GroupReport, PairReport, SubsetSimilaritySummary};

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            label: Some("sample".to_string()),
            hidden_states: 3,
            threshold: 0.65,
            groups: vec![
                GroupReport {
                    number: 1,
                    seed: 'a',
                    symbols: vec!['a', 'e', ' '],
                },
                GroupReport {
                    number: 2,
                    seed: 'b',
                    symbols: vec!['b'],
                },
            ],
            subsets: vec![
                SubsetSimilaritySummary {
                    name: "vowels".to_string(),
                    symbols: vec!['a', 'e'],
                    average: Some(0.91234),
                },
                SubsetSimilaritySummary {
                    name: "solo".to_string(),
                    symbols: vec!['b'],
                    average: None,
                },
            ],
            cross_subsets: vec![CrossSubsetSummary {
                left: "vowels".to_string(),
                right: "solo".to_string(),
                average: Some(0.1),
            }],
            top_pairs: vec![PairReport {
                left: 'a',
                right: 'e',
                similarity: 0.91234,
            }],
            zero_norm_symbols: Vec::new(),
        }
    }

    #[test]
    fn test_terminal_output() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, Box::new(PlainFormatter))
            .write_reports(&[sample_report()])
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Results for N=3 hidden states"));
        assert!(text.contains("Input: sample"));
        assert!(text.contains("Letter groupings (threshold=0.65):"));
        assert!(text.contains("Group 1: ['a', 'e', ' ']"));
        assert!(text.contains("Group 2: ['b']"));
        assert!(text.contains("Average similarity within vowels (a,e): 0.9123"));
        assert!(!text.contains("within solo"));
        assert!(text.contains("Average similarity between vowels and solo: 0.1000"));
        assert!(text.contains("Top 1 most similar letter pairs:"));
        assert!(text.contains("  a - e: 0.9123"));
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_reports(&[sample_report()])
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value[0]["hidden_states"], 3);
        assert_eq!(value[0]["groups"][0]["symbols"][2], " ");
        assert!(value[0]["subsets"][1]["average"].is_null());
        assert_eq!(value[0]["top_pairs"][0]["left"], "a");
    }
}
