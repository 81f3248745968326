//! App-wide constants.
//!
//! Centralises the tool name, section keys, environment variable names,
//! and temp-file naming so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "pflake";

/// Project configuration filename searched for upward from the working directory.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Top-level TOML table holding per-tool sections.
pub const TOOL_TABLE: &str = "tool";

/// Tool-specific section key (`[tool.pflake]`). Wins on key collisions.
pub const PRIMARY_SECTION: &str = "pflake";

/// Compatibility section key (`[tool.flake8]`).
pub const SECONDARY_SECTION: &str = "flake8";

/// Section header flake8's own config parser looks for.
pub const LEGACY_SECTION: &str = "flake8";

/// Binary invoked for the actual lint run.
pub const FLAKE8_BIN: &str = "flake8";

/// Prefix and suffix for the transient config file.
pub const TEMPFILE_PREFIX: &str = "pflake_";
pub const TEMPFILE_SUFFIX: &str = ".cfg";


// ── Environment variable names ──────────────────────────────────────

/// Overrides the flake8 binary name/path.
pub const ENV_FLAKE8_BIN: &str = "PFLAKE_FLAKE8";

/// Truthy value enables verbose diagnostics on stderr.
pub const ENV_DEBUG: &str = "PFLAKE_DEBUG";
