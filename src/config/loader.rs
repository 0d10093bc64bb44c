use std::fs;
use std::path::Path;

use super::AnalysisConfig;
use crate::core::{Error, Result};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".lettergroups.toml";

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<AnalysisConfig> {
    let config = toml::from_str::<AnalysisConfig>(contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.validate()?;
    Ok(config)
}

/// Load the analysis configuration.
///
/// An explicit path must be readable and valid. Without one,
/// `.lettergroups.toml` in the working directory is used when present; a
/// missing, unreadable or invalid default file falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AnalysisConfig> {
    match explicit {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
            let config = parse_config(&contents)?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(try_load_config_from_path(Path::new(CONFIG_FILE_NAME)).unwrap_or_default()),
    }
}

fn try_load_config_from_path(config_path: &Path) -> Option<AnalysisConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}
