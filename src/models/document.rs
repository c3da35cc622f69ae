//! Translation bundle document.
//!
//! A document is a JSON object whose values are strings, sequences or
//! nested objects. Key order is preserved (`serde_json/preserve_order`) so a
//! rewritten file keeps the order of the document it was built from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::FieldPath;

/// One language's translation bundle.
///
/// Deserialization fails unless the JSON root is an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Pretty-printed JSON: 2-space indentation, non-ASCII left unescaped.
    pub fn to_pretty_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.0)?)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at a dotted path, if every parent is an object and the key exists.
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = &self.0;
        for segment in path.parents() {
            current = current.get(segment)?.as_object()?;
        }
        current.get(path.leaf())
    }

    /// Replace the value at an existing path, returning the old value.
    ///
    /// Does nothing and returns `None` when the path is not addressable:
    /// new keys are never created.
    pub fn replace(&mut self, path: &FieldPath, value: Value) -> Option<Value> {
        let mut current = &mut self.0;
        for segment in path.parents() {
            current = current.get_mut(segment)?.as_object_mut()?;
        }
        let slot = current.get_mut(path.leaf())?;
        Some(std::mem::replace(slot, value))
    }

    /// Set a top-level section. An existing section keeps its position.
    pub fn set_section(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Equality that also requires identical key order at every level.
    pub fn is_identical_to(&self, other: &Document) -> bool {
        maps_identical(&self.0, &other.0)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    fn try_from(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

fn maps_identical(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|((ka, va), (kb, vb))| ka == kb && values_identical(va, vb))
}

fn values_identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => maps_identical(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_identical(x, y))
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::try_from(value).unwrap()
    }

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(Document::from_slice(b"[1, 2, 3]").is_err());
        assert!(Document::from_slice(b"\"text\"").is_err());
        assert!(Document::from_slice(b"{\"hero\": ").is_err());
    }

    #[test]
    fn get_walks_nested_objects() {
        let d = doc(json!({"footer": {"privacy": "Privacy"}, "hero": "flat"}));
        assert_eq!(d.get(&path("footer.privacy")), Some(&json!("Privacy")));
        assert_eq!(d.get(&path("footer.terms")), None);
        assert_eq!(d.get(&path("hero.headline")), None);
    }

    #[test]
    fn replace_only_touches_existing_keys() {
        let mut d = doc(json!({"footer": {"privacy": "Privacy"}}));

        let old = d.replace(&path("footer.privacy"), json!("Confidentialité"));
        assert_eq!(old, Some(json!("Privacy")));

        assert_eq!(d.replace(&path("footer.terms"), json!("Terms")), None);
        assert_eq!(d.replace(&path("header.cta"), json!("Talk")), None);
        assert_eq!(
            d.into_value(),
            json!({"footer": {"privacy": "Confidentialité"}})
        );
    }

    #[test]
    fn set_section_keeps_position_of_existing_key() {
        let mut d = doc(json!({"hero": 1, "faq": 2, "footer": 3}));
        d.set_section("faq", json!({"questions": []}));
        d.set_section("header", json!("new"));

        let keys: Vec<&String> = d.as_map().keys().collect();
        assert_eq!(keys, ["hero", "faq", "footer", "header"]);
    }

    #[test]
    fn pretty_output_is_two_space_and_unescaped() {
        let d = doc(json!({"footer": {"privacy": "Politique de confidentialité"}}));
        let text = String::from_utf8(d.to_pretty_vec().unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n  \"footer\": {\n    \"privacy\": \"Politique de confidentialité\"\n  }\n}"
        );
    }

    #[test]
    fn identical_requires_same_key_order() {
        let a = Document::from_slice(br#"{"a": 1, "b": {"c": [1, 2]}}"#).unwrap();
        let b = Document::from_slice(br#"{"b": {"c": [1, 2]}, "a": 1}"#).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_identical_to(&b));
        assert!(a.is_identical_to(&a.clone()));
    }
}
