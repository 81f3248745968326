//! Project configuration discovery and extraction.
//!
//! Handles locating `pyproject.toml` and pulling the flake8 option
//! mapping out of its `[tool.*]` sections.

pub mod locator;
pub mod section;

pub use locator::find_pyproject;
pub use section::{extract_section, ConfigSection, ConfigValue};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors during configuration discovery and parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no pyproject.toml found in the current directory or any parent")]
    NotFound,

    #[error("configuration file does not exist: {path}")]
    ExplicitPathMissing { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a pyproject.toml into a TOML table.
pub async fn load_document(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    content.parse::<toml::Table>().map_err(|e| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source: e,
    })
}
