//! Extracts the flake8 option mapping from a parsed pyproject.toml.
//!
//! Options live under `[tool.pflake]` (tool-specific) or `[tool.flake8]`
//! (compatibility). Values are carried as an explicit tagged union so the
//! translator can handle every shape exhaustively instead of falling back
//! to implicit stringification.

use indexmap::IndexMap;

use crate::constants::{PRIMARY_SECTION, SECONDARY_SECTION, TOOL_TABLE};

/// A single option value from the pyproject section.
///
/// `Other` carries shapes the legacy format cannot represent (floats,
/// datetimes, tables, mixed arrays); the translator rejects them with the
/// offending key instead of emitting corrupt config.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
    Other(toml::Value),
}

/// Ordered option-name → value mapping extracted from pyproject.toml.
pub type ConfigSection = IndexMap<String, ConfigValue>;

/// Extract the flake8 options from a parsed pyproject.toml document.
///
/// `[tool.flake8]` is read first and `[tool.pflake]` is applied on top,
/// so on a key collision the tool-specific value wins. Key order follows
/// the compatibility section, with pflake-only keys appended. A document
/// with neither section yields an empty mapping, not an error.
pub fn extract_section(doc: &toml::Table) -> ConfigSection {
    let mut section = ConfigSection::new();

    let Some(tool) = doc.get(TOOL_TABLE).and_then(|v| v.as_table()) else {
        return section;
    };

    for key in [SECONDARY_SECTION, PRIMARY_SECTION] {
        if let Some(table) = tool.get(key).and_then(|v| v.as_table()) {
            for (name, value) in table {
                section.insert(name.clone(), convert(value));
            }
        }
    }

    section
}

/// Map a TOML value onto the option value union.
fn convert(value: &toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::Str(s.clone()),
        toml::Value::Integer(i) => ConfigValue::Int(*i),
        toml::Value::Boolean(b) => ConfigValue::Bool(*b),
        toml::Value::Array(items) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            match strings {
                Some(list) => ConfigValue::List(list),
                None => ConfigValue::Other(value.clone()),
            }
        }
        other => ConfigValue::Other(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> toml::Table {
        input.parse::<toml::Table>().unwrap()
    }

    #[test]
    fn missing_tool_table_yields_empty_section() {
        let doc = parse("[project]\nname = \"demo\"\n");
        assert!(extract_section(&doc).is_empty());
    }

    #[test]
    fn missing_sections_yield_empty_section() {
        let doc = parse("[tool.black]\nline-length = 88\n");
        assert!(extract_section(&doc).is_empty());
    }

    #[test]
    fn secondary_section_used_when_primary_absent() {
        let doc = parse(
            r#"
[tool.flake8]
max-line-length = 79
statistics = true
"#,
        );
        let section = extract_section(&doc);
        assert_eq!(section.len(), 2);
        assert_eq!(section["max-line-length"], ConfigValue::Int(79));
        assert_eq!(section["statistics"], ConfigValue::Bool(true));
    }

    #[test]
    fn primary_section_wins_on_collision() {
        let doc = parse(
            r#"
[tool.flake8]
max-line-length = 79
statistics = true

[tool.pflake]
max-line-length = 120
"#,
        );
        let section = extract_section(&doc);
        assert_eq!(section["max-line-length"], ConfigValue::Int(120));
        assert_eq!(section["statistics"], ConfigValue::Bool(true));
    }

    #[test]
    fn primary_only_keys_are_appended() {
        let doc = parse(
            r#"
[tool.flake8]
statistics = true

[tool.pflake]
count = true
"#,
        );
        let section = extract_section(&doc);
        let keys: Vec<_> = section.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["statistics", "count"]);
    }

    #[test]
    fn key_order_is_preserved() {
        let doc = parse(
            r#"
[tool.flake8]
zebra = 1
alpha = 2
middle = 3
"#,
        );
        let section = extract_section(&doc);
        let keys: Vec<_> = section.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn string_list_is_preserved_in_order() {
        let doc = parse("[tool.flake8]\nexclude = [\".git\", \".vscode\"]\n");
        let section = extract_section(&doc);
        assert_eq!(
            section["exclude"],
            ConfigValue::List(vec![".git".to_string(), ".vscode".to_string()])
        );
    }

    #[test]
    fn mixed_array_becomes_other() {
        let doc = parse("[tool.flake8]\nweird = [\"a\", 1]\n");
        let section = extract_section(&doc);
        assert!(matches!(section["weird"], ConfigValue::Other(_)));
    }

    #[test]
    fn float_becomes_other() {
        let doc = parse("[tool.flake8]\nratio = 0.5\n");
        let section = extract_section(&doc);
        assert!(matches!(section["ratio"], ConfigValue::Other(_)));
    }
}
