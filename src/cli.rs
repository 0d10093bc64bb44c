use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lettergroups")]
#[command(about = "Group alphabet symbols by cosine similarity of their emission embeddings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group symbols and report similarity statistics for emission matrices
    Analyze {
        /// Emission matrix JSON files (N hidden states x 27 symbols), analyzed in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Configuration file (defaults to .lettergroups.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Similarity threshold for joining a group (inclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Number of most similar pairs to list
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .lettergroups.toml
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
