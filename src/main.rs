use anyhow::Result;
use clap::Parser;
use lettergroups::cli::{Cli, Commands};
use lettergroups::commands::analyze::{handle_analyze, AnalyzeConfig};
use lettergroups::formatting::FormattingConfig;
use lettergroups::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            inputs,
            config,
            threshold,
            top,
            format,
            output,
            plain,
            verbosity,
        } => {
            init_tracing(verbosity);
            handle_analyze(AnalyzeConfig {
                inputs,
                config,
                threshold,
                top,
                format,
                output,
                formatting: create_formatting_config(plain),
            })
        }
        Commands::Init { force } => {
            init_tracing(0);
            lettergroups::commands::init::init_config(force)
        }
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
