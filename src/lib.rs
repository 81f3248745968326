//! pflake — run flake8 with configuration from pyproject.toml (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod env;
pub mod translate;
