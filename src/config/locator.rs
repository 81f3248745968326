//! Locates the nearest `pyproject.toml`.
//!
//! An explicitly supplied path always wins. Otherwise the search starts
//! in the working directory and walks up through every ancestor until
//! the filesystem root is exhausted.

use std::path::{Path, PathBuf};

use super::ConfigError;
use crate::constants::PYPROJECT_FILENAME;

/// Resolve the pyproject.toml to use.
///
/// A supplied `explicit` path must exist; a dangling `--pyproject` value
/// is an error rather than a silent fallback to the upward search.
pub fn find_pyproject(explicit: Option<&Path>, start_dir: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ConfigError::ExplicitPathMissing {
            path: path.to_path_buf(),
        });
    }

    for dir in start_dir.ancestors() {
        let candidate = dir.join(PYPROJECT_FILENAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::NotFound)
}
