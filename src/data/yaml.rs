//! YAML processing utilities

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yaml_rust_davvid::YamlEmitter;

/// Serialize data structure to YAML string with proper multi-line formatting
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    // Round-trip through serde_yaml::Value so yaml-rust can emit block scalars
    let serde_value = serde_yaml::to_value(data).context("Failed to serialize to serde value")?;
    let yaml_rust_value = convert_serde_to_yaml_rust(&serde_value)?;

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter
        .dump(&yaml_rust_value)
        .context("Failed to emit YAML")?;

    Ok(output)
}

/// Convert serde_yaml::Value to yaml_rust_davvid::Yaml
fn convert_serde_to_yaml_rust(value: &serde_yaml::Value) -> Result<yaml_rust_davvid::Yaml> {
    use yaml_rust_davvid::Yaml;

    match value {
        serde_yaml::Value::Null => Ok(Yaml::Null),
        serde_yaml::Value::Bool(b) => Ok(Yaml::Boolean(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Yaml::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Yaml::Real(f.to_string()))
            } else {
                Ok(Yaml::String(n.to_string()))
            }
        }
        serde_yaml::Value::String(s) => Ok(Yaml::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let yaml_seq: Result<Vec<_>> = seq.iter().map(convert_serde_to_yaml_rust).collect();
            Ok(Yaml::Array(yaml_seq?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut yaml_map = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                yaml_map.insert(convert_serde_to_yaml_rust(k)?, convert_serde_to_yaml_rust(v)?);
            }
            Ok(Yaml::Hash(yaml_map))
        }
        serde_yaml::Value::Tagged(tagged) => convert_serde_to_yaml_rust(&tagged.value),
    }
}

/// Deserialize YAML string to data structure
pub fn from_yaml<T: for<'de> Deserialize<'de>>(yaml: &str) -> Result<T> {
    serde_yaml::from_str(yaml).context("Failed to deserialize YAML")
}

/// Read and parse YAML file
pub fn read_yaml_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path.as_ref().display()))?;

    from_yaml(&content)
        .with_context(|| format!("Failed to parse YAML file: {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::check::{LintReport, RuleResult, Severity};
    use crate::lint::RuleId;

    #[test]
    fn multiline_messages_are_block_scalars() {
        let report = LintReport::new(
            "foo: bar",
            vec![RuleResult {
                rule: RuleId::BodyProse,
                severity: Severity::Error,
                valid: false,
                message: "First line.\nSecond line.".to_string(),
            }],
        );
        let yaml = to_yaml(&report).unwrap();
        assert!(yaml.contains("rule: body-prose"));
        assert!(yaml.contains("severity: error"));
        assert!(yaml.contains("|"));
        assert!(yaml.contains("Second line."));
    }

    #[test]
    fn read_yaml_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "rules: [unterminated").unwrap();
        let err = read_yaml_file::<serde_yaml::Value, _>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.yaml"));
    }

    #[test]
    fn from_yaml_round_trip() {
        let value: Vec<String> = from_yaml("- a\n- b\n").unwrap();
        assert_eq!(value, vec!["a", "b"]);
    }
}
