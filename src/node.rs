//! The key/value tree that [`Layout::layout_group`](crate::layout::Layout::layout_group) walks.
//!
//! A tree is either built directly in Rust:
//!
//! ```
//! use pdf_overlay::{Group, LayoutNode};
//!
//! let tree = Group::new()
//!     .with("Name", "Ada Lovelace")
//!     .with("Address", Group::new().with("City", "London").with("Street", "St James's Square"));
//! assert_eq!(tree.len(), 2);
//! assert!(matches!(tree.get("Address"), Some(LayoutNode::Group(_))));
//! ```
//!
//! or read from JSON, where every value must be a string (a paragraph) or an object
//! (a nested group). Object keys keep the order they have in the source text.
//!
//! ```
//! use pdf_overlay::Group;
//!
//! let tree = Group::from_json_str(r#"{ "Zeta": "last?", "Alpha": "no, first" }"#).unwrap();
//! let keys: Vec<&str> = tree.iter().map(|(key, _)| key).collect();
//! assert_eq!(keys, ["Zeta", "Alpha"]);
//! ```

use crate::error::OverlayError;
use serde_json::Value;

/// A value in the layout tree
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    /// A paragraph, wrapped into the value column
    Leaf(String),
    /// A nested block of keys, indented under its parent key
    Group(Group),
}

/// An ordered mapping of unique keys to [LayoutNode]s. Iteration follows insertion
/// order; keys are never sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    entries: Vec<(String, LayoutNode)>,
}

impl Group {
    pub fn new() -> Group {
        Group::default()
    }

    /// Insert an entry at the end of the group. If the key is already present its
    /// value is replaced in place and the key keeps its original position.
    pub fn insert<K: Into<String>, N: Into<LayoutNode>>(&mut self, key: K, node: N) -> &mut Self {
        let key = key.into();
        let node = node.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.entries.push((key, node)),
        }
        self
    }

    /// Consuming form of [Group::insert], for building trees inline
    pub fn with<K: Into<String>, N: Into<LayoutNode>>(mut self, key: K, node: N) -> Group {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&LayoutNode> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayoutNode)> {
        self.entries.iter().map(|(k, node)| (k.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON document whose root is an object into a group
    pub fn from_json_str(json: &str) -> Result<Group, OverlayError> {
        let value: Value = serde_json::from_str(json)?;
        Group::from_json(&value)
    }

    /// Convert a JSON object into a group, see [LayoutNode::from_json]
    pub fn from_json(value: &Value) -> Result<Group, OverlayError> {
        match LayoutNode::from_json(value)? {
            LayoutNode::Group(group) => Ok(group),
            LayoutNode::Leaf(_) => Err(OverlayError::InvalidNode {
                path: String::new(),
                found: "string",
            }),
        }
    }
}

impl LayoutNode {
    /// Convert an untyped JSON value into a layout tree. Strings become leaves and
    /// objects become groups; any other value aborts the conversion with
    /// [OverlayError::InvalidNode], naming the dotted key path it was found at.
    pub fn from_json(value: &Value) -> Result<LayoutNode, OverlayError> {
        node_from_json(value, "")
    }
}

fn node_from_json(value: &Value, path: &str) -> Result<LayoutNode, OverlayError> {
    let found = match value {
        Value::String(text) => return Ok(LayoutNode::Leaf(text.clone())),
        Value::Object(map) => {
            // object keys are already unique, so entries go straight in without the
            // lookup `insert` does
            let mut entries = Vec::with_capacity(map.len());
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                entries.push((key.clone(), node_from_json(child, &child_path)?));
            }
            return Ok(LayoutNode::Group(Group { entries }));
        }
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::Array(_) => "an array",
    };

    Err(OverlayError::InvalidNode {
        path: path.to_string(),
        found,
    })
}

impl From<&str> for LayoutNode {
    fn from(text: &str) -> Self {
        LayoutNode::Leaf(text.to_string())
    }
}

impl From<String> for LayoutNode {
    fn from(text: String) -> Self {
        LayoutNode::Leaf(text)
    }
}

impl From<Group> for LayoutNode {
    fn from(group: Group) -> Self {
        LayoutNode::Group(group)
    }
}

impl<K: Into<String>, N: Into<LayoutNode>> FromIterator<(K, N)> for Group {
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        let mut group = Group::new();
        for (key, node) in iter {
            group.insert(key, node);
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicate_keys_replace_in_place() {
        let mut group = Group::new();
        group.insert("a", "1").insert("b", "2").insert("a", "3");

        let entries: Vec<_> = group.iter().collect();
        assert_eq!(
            entries,
            [
                ("a", &LayoutNode::from("3")),
                ("b", &LayoutNode::from("2"))
            ]
        );
    }

    #[test]
    fn json_keeps_source_order_at_every_depth() {
        let value = json!({
            "Title": "Report",
            "Details": { "Second": "b", "First": "a" },
            "Author": "me",
        });

        let group = Group::from_json(&value).expect("valid tree");
        let keys: Vec<&str> = group.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Title", "Details", "Author"]);

        let Some(LayoutNode::Group(details)) = group.get("Details") else {
            panic!("Details should be a group");
        };
        let keys: Vec<&str> = details.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Second", "First"]);
    }

    #[test]
    fn large_objects_convert_every_key_in_order() {
        let keys: Vec<String> = (0..5000).map(|i| format!("key{i:05}")).rev().collect();
        let map: serde_json::Map<String, Value> = keys
            .iter()
            .map(|key| (key.clone(), Value::String(key.to_lowercase())))
            .collect();

        let group = Group::from_json(&Value::Object(map)).expect("valid tree");
        assert_eq!(group.len(), keys.len());
        assert!(group.iter().map(|(k, _)| k).eq(keys.iter().map(String::as_str)));
        assert_eq!(group.get("key00042"), Some(&LayoutNode::from("key00042")));
    }

    #[test]
    fn rejects_values_that_are_neither_text_nor_groups() {
        let value = json!({ "Outer": { "Inner": "ok", "Count": 3 } });
        match Group::from_json(&value) {
            Err(OverlayError::InvalidNode { path, found }) => {
                assert_eq!(path, "Outer.Count");
                assert_eq!(found, "a number");
            }
            other => panic!("expected InvalidNode, got {other:?}"),
        }

        for bad in [json!(null), json!(true), json!(["a"])] {
            let err = Group::from_json(&json!({ "k": bad })).unwrap_err();
            assert!(matches!(err, OverlayError::InvalidNode { ref path, .. } if path == "k"));
        }
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(matches!(
            Group::from_json_str(r#""just text""#),
            Err(OverlayError::InvalidNode { .. })
        ));
        assert!(matches!(
            Group::from_json_str("{ not json"),
            Err(OverlayError::Json(_))
        ));
    }
}
