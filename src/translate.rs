//! Renders an extracted option mapping as legacy flake8 INI text.
//!
//! flake8 only understands the flat `[flake8]` / `key=value` format that
//! configparser reads, so every TOML value has to be spelled the way
//! configparser would have written it: `True`/`False` booleans and
//! tab-indented continuation lines for multi-line values.

use std::fmt::Write;

use thiserror::Error;

use crate::config::{ConfigSection, ConfigValue};
use crate::constants::LEGACY_SECTION;

/// Errors while rendering the legacy config text.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("option '{key}' has a value ({found}) that cannot be expressed in flake8 config")]
    UnsupportedValue { key: String, found: String },

    #[error("option '{key}' contains a list element that the flake8 config format cannot represent (empty or multi-line)")]
    UnrepresentableListElement { key: String },
}

/// Render a config section as a `[flake8]` INI block.
///
/// Deterministic: the same section always produces byte-identical output,
/// with keys in source order. An empty section renders as the bare header,
/// which is still a valid config for flake8.
pub fn render_ini(section: &ConfigSection) -> Result<String, TranslateError> {
    let mut out = String::new();
    writeln_str(&mut out, &format!("[{LEGACY_SECTION}]"));

    for (key, value) in section {
        match value {
            ConfigValue::Bool(b) => {
                // configparser convention: capitalised booleans.
                writeln_str(&mut out, &format!("{key}={}", if *b { "True" } else { "False" }));
            }
            ConfigValue::Int(i) => {
                writeln_str(&mut out, &format!("{key}={i}"));
            }
            ConfigValue::Str(s) => {
                writeln_str(&mut out, &format!("{key}={}", continuation(s)));
            }
            ConfigValue::List(items) => {
                // One indented line per element: an empty element vanishes on
                // read-back and an embedded newline reads back as two
                // elements, so both are rejected instead of silently mangled.
                if items.iter().any(|item| item.is_empty() || item.contains('\n')) {
                    return Err(TranslateError::UnrepresentableListElement { key: key.clone() });
                }
                writeln_str(&mut out, &format!("{key}="));
                for item in items {
                    writeln_str(&mut out, &format!("\t{item}"));
                }
            }
            ConfigValue::Other(v) => {
                return Err(TranslateError::UnsupportedValue {
                    key: key.clone(),
                    found: v.type_str().to_string(),
                });
            }
        }
    }

    Ok(out)
}

/// Tab-indent embedded newlines (configparser multi-line value syntax).
fn continuation(value: &str) -> String {
    value.replace('\n', "\n\t")
}

fn writeln_str(out: &mut String, line: &str) {
    // write! to a String cannot fail.
    let _ = writeln!(out, "{line}");
}
