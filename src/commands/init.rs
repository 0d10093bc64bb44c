use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# lettergroups configuration

# Inclusive similarity a symbol needs to its group's seed
threshold = 0.65

# Length of the most similar pairs listing
top_k = 10

[[subsets]]
name = "vowels"
symbols = "aeiou"

[[subsets]]
name = "consonants"
symbols = "bcdfghjklmnpqrstvwxyz"

[[cross_subsets]]
left = "vowels"
right = "consonants"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
