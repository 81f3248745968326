//! CLI definition and argument parsing.
//!
//! Uses clap derive macros. Everything pflake does not recognise is
//! forwarded to flake8 verbatim.

pub mod args;
