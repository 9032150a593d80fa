// Error types
// Only the configuration layer can fail; indicator drawing degrades silently

use std::path::PathBuf;
use thiserror::Error;

/// Invalid sizing keyword (expected fit_content, fill_parent or a cell count)
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid size mode '{0}' (expected fit_content, fill_parent or a number of cells)")]
pub struct ParseSizeModeError(pub String);

/// Errors raised while loading the YAML configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("tab strip with hwnd '{hwnd}' not found in config. Available tab strips: {available}")]
    MissingTabStrip { hwnd: String, available: String },
}
