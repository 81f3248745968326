//! Writes the translated config to a transient file and runs flake8.
//!
//! Shells out via `tokio::process::Command` with stdio inherited, so
//! flake8's own output reaches the caller untouched. The temp file is
//! owned by a [`tempfile::NamedTempFile`] guard and is removed on every
//! exit path, including early returns and unwinding.

use std::io::Write;

use thiserror::Error;

use crate::constants::{ENV_FLAKE8_BIN, FLAKE8_BIN, TEMPFILE_PREFIX, TEMPFILE_SUFFIX};
use crate::env::Env;

/// Errors while setting up or spawning the flake8 invocation.
///
/// flake8's own non-zero exit is not an error; it comes back as the
/// return code.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to create temporary config file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("failed to write temporary config file: {0}")]
    WriteConfig(#[source] std::io::Error),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },
}

/// Exit code reported when the run is interrupted (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Run flake8 against a transient config file and return its exit code.
///
/// `--config=<tempfile>` is prepended to the passthrough arguments; nothing
/// else is injected and no output is intercepted. Termination of flake8 by
/// signal (no exit code) maps to 1.
///
/// An interrupt (Ctrl-C / SIGINT) arriving while flake8 runs is caught so
/// the return path still executes: the child is stopped, the transient file
/// is removed by the guard, and [`INTERRUPTED_EXIT_CODE`] is returned.
pub async fn run_flake8(
    config_text: &str,
    passthrough: &[String],
    env: &Env,
) -> Result<i32, DispatchError> {
    let mut config_file = tempfile::Builder::new()
        .prefix(TEMPFILE_PREFIX)
        .suffix(TEMPFILE_SUFFIX)
        .tempfile()
        .map_err(DispatchError::TempFile)?;
    config_file
        .write_all(config_text.as_bytes())
        .and_then(|()| config_file.flush())
        .map_err(DispatchError::WriteConfig)?;

    let program = env
        .var(ENV_FLAKE8_BIN)
        .unwrap_or_else(|_| FLAKE8_BIN.to_string());

    let mut child = tokio::process::Command::new(&program)
        .arg(format!("--config={}", config_file.path().display()))
        .args(passthrough)
        .spawn()
        .map_err(|e| DispatchError::Spawn {
            program: program.clone(),
            source: e,
        })?;

    let status = tokio::select! {
        status = child.wait() => status.map_err(|e| DispatchError::Wait {
            program: program.clone(),
            source: e,
        })?,
        _ = tokio::signal::ctrl_c() => {
            // Stop the child and return through the normal path so the
            // tempfile guard still drops.
            let _ = child.kill().await;
            let _ = child.wait().await;
            return Ok(INTERRUPTED_EXIT_CODE);
        }
    };

    // config_file is dropped here, deleting the transient file.
    Ok(status.code().unwrap_or(1))
}
