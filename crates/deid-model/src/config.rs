/// Key that marks a mapping node as a dataset section.
pub const TABLES_TO_DEID: &str = "tables_to_deid";

/// Untyped configuration tree.
///
/// The raw YAML document is converted into this tagged form before any
/// traversal, so the dataset-detection rule and the recursion operate on
/// explicit variants instead of duck-typed checks. Mapping entries keep
/// their document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigNode {
    Mapping(Vec<(String, ConfigNode)>),
    List(Vec<ConfigNode>),
    Scalar(String),
    Null,
}

impl ConfigNode {
    /// Mapping entries in document order, or `None` for other variants.
    pub fn as_mapping(&self) -> Option<&[(String, ConfigNode)]> {
        match self {
            ConfigNode::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigNode]> {
        match self {
            ConfigNode::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigNode::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping node. `None` for non-mapping variants.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_mapping()?
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigNode {
        ConfigNode::Mapping(vec![
            ("alpha".to_string(), ConfigNode::Scalar("1".to_string())),
            ("beta".to_string(), ConfigNode::List(vec![ConfigNode::Null])),
        ])
    }

    #[test]
    fn mapping_lookup() {
        let node = sample();
        assert_eq!(node.get("alpha").and_then(ConfigNode::as_str), Some("1"));
        assert!(node.get("gamma").is_none());
        assert!(node.contains_key("beta"));
    }

    #[test]
    fn variant_accessors() {
        let node = sample();
        assert!(node.as_mapping().is_some());
        assert!(node.as_list().is_none());
        assert!(ConfigNode::Scalar("x".to_string()).as_str().is_some());
        assert!(ConfigNode::Null.get("anything").is_none());
    }
}
