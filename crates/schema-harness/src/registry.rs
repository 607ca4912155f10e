//! Per-run registry of auxiliary schemas resolvable by reference.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::dialect::parse_normalized;
use crate::types::{HarnessError, HarnessResult};

/// Schemas registered for a single `run`, keyed by absolute URI.
///
/// Keys are normalized the same way dialect URIs are: an empty fragment is
/// dropped, and the URL parser's canonical form is kept (`http://example.com`
/// is stored as `http://example.com/`).
///
/// A fresh registry is built for every case and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: BTreeMap<String, Value>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema document under `uri`.
    pub fn register(&mut self, uri: &str, schema: Value) -> HarnessResult<()> {
        let parsed = parse_normalized(uri).map_err(|e| HarnessError::RegistryEntry {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

        if !(schema.is_object() || schema.is_boolean()) {
            return Err(HarnessError::RegistryEntry {
                uri: uri.to_string(),
                reason: format!("expected an object or boolean schema, got {schema}"),
            });
        }

        if self.entries.insert(parsed.into(), schema).is_some() {
            tracing::debug!("Registry entry {uri} replaced an earlier one");
        }
        Ok(())
    }

    /// Look up an entry by URI, normalized the same way as on registration.
    pub fn get(&self, uri: &str) -> Option<&Value> {
        let key: String = parse_normalized(uri).ok()?.into();
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(uri, schema)| (uri.as_str(), schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new();
        registry
            .register("http://example.com/item.json", json!({"type": "integer"}))
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("http://example.com/item.json"),
            Some(&json!({"type": "integer"}))
        );
    }

    #[test]
    fn test_register_urn() {
        let mut registry = SchemaRegistry::new();
        registry.register("urn:example:positive", json!({"minimum": 0})).unwrap();
        assert!(registry.get("urn:example:positive").is_some());
    }

    #[test]
    fn test_keys_are_normalized() {
        let mut registry = SchemaRegistry::new();
        registry.register("urn:example:thing#", json!({})).unwrap();
        registry.register("http://example.com", json!(true)).unwrap();

        let keys: Vec<&str> = registry.iter().map(|(uri, _)| uri).collect();
        assert_eq!(keys, vec!["http://example.com/", "urn:example:thing"]);
        assert!(registry.get("urn:example:thing").is_some());
        assert!(registry.get("urn:example:thing#").is_some());
        assert!(registry.get("http://example.com").is_some());
    }

    #[test]
    fn test_empty_fragment_duplicates_replace() {
        let mut registry = SchemaRegistry::new();
        registry.register("urn:example:thing", json!(false)).unwrap();
        registry.register("urn:example:thing#", json!(true)).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("urn:example:thing"), Some(&json!(true)));
    }

    #[test]
    fn test_register_boolean_schema() {
        let mut registry = SchemaRegistry::new();
        registry.register("urn:example:anything", json!(true)).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_relative_uri_rejected() {
        let mut registry = SchemaRegistry::new();
        let err = registry.register("item.json", json!({})).unwrap_err();
        assert!(matches!(err, HarnessError::RegistryEntry { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_non_schema_rejected() {
        let mut registry = SchemaRegistry::new();
        let err = registry.register("urn:example:bad", json!(42)).unwrap_err();
        assert!(err.to_string().contains("urn:example:bad"));
    }
}
