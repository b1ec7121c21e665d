//! YAML configuration loading.

use std::path::Path;

use tracing::{debug, info};

use deid_model::ConfigNode;

use crate::error::{IngestError, Result};

/// Tab stop used for indentation repair. The project files this tool audits
/// use two-space nesting, so hard tabs are expanded to the same stop before
/// parsing.
const TAB_STOP: usize = 2;

/// Loads a project configuration file into a [`ConfigNode`] tree.
pub fn load_config(path: &Path) -> Result<ConfigNode> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let repaired = expand_tabs(&raw, TAB_STOP);
    if repaired != raw {
        debug!(path = %path.display(), "expanded hard tabs in configuration");
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(&repaired).map_err(|source| IngestError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let node = node_from_yaml(&value).map_err(|message| IngestError::UnsupportedStructure {
        path: path.to_path_buf(),
        message,
    })?;
    info!(path = %path.display(), "configuration loaded");
    Ok(node)
}

/// Expands hard tabs to spaces at `tab_stop` columns, line by line.
fn expand_tabs(text: &str, tab_stop: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let mut column = 0usize;
        for ch in line.chars() {
            match ch {
                '\t' => {
                    let width = tab_stop - column % tab_stop;
                    for _ in 0..width {
                        out.push(' ');
                    }
                    column += width;
                }
                '\n' | '\r' => out.push(ch),
                _ => {
                    out.push(ch);
                    column += 1;
                }
            }
        }
    }
    out
}

fn node_from_yaml(value: &serde_yaml::Value) -> std::result::Result<ConfigNode, String> {
    use serde_yaml::Value;

    match value {
        Value::Null => Ok(ConfigNode::Null),
        Value::Bool(value) => Ok(ConfigNode::Scalar(value.to_string())),
        Value::Number(value) => Ok(ConfigNode::Scalar(value.to_string())),
        Value::String(value) => Ok(ConfigNode::Scalar(value.clone())),
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(node_from_yaml(item)?);
            }
            Ok(ConfigNode::List(out))
        }
        Value::Mapping(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, item) in entries {
                out.push((scalar_key(key)?, node_from_yaml(item)?));
            }
            Ok(ConfigNode::Mapping(out))
        }
        Value::Tagged(tagged) => node_from_yaml(&tagged.value),
    }
}

fn scalar_key(key: &serde_yaml::Value) -> std::result::Result<String, String> {
    use serde_yaml::Value;

    match key {
        Value::String(value) => Ok(value.clone()),
        Value::Number(value) => Ok(value.to_string()),
        Value::Bool(value) => Ok(value.to_string()),
        other => Err(format!("mapping keys must be scalars, found {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_tabs_to_two_space_stops() {
        assert_eq!(expand_tabs("\ta", 2), "  a");
        assert_eq!(expand_tabs("x\ty", 2), "x y");
        assert_eq!(expand_tabs("xx\ty", 2), "xx  y");
        assert_eq!(expand_tabs("\t\t- a\n", 2), "    - a\n");
    }

    #[test]
    fn expansion_resets_per_line() {
        assert_eq!(expand_tabs("a\n\tb", 2), "a\n  b");
    }

    #[test]
    fn converts_scalars_to_strings() {
        let value: serde_yaml::Value = serde_yaml::from_str("{id: 42, flag: true}").unwrap();
        let node = node_from_yaml(&value).unwrap();
        assert_eq!(node.get("id").and_then(ConfigNode::as_str), Some("42"));
        assert_eq!(node.get("flag").and_then(ConfigNode::as_str), Some("true"));
    }
}
