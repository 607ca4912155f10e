//! Implementation identity advertised during the handshake.

use serde::{Deserialize, Serialize};

use crate::engine::{Engine, Link};

/// Identity of the wrapped implementation. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationMetadata {
    pub language: String,
    pub name: String,
    pub version: String,
    pub dialects: Vec<String>,
    pub homepage: String,
    pub documentation: String,
    pub issues: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl ImplementationMetadata {
    /// Describe `engine` running on this host.
    pub fn describe(engine: &impl Engine) -> Self {
        let identity = engine.identity();
        Self {
            language: "rust".to_string(),
            name: identity.name,
            version: identity.version,
            dialects: engine.dialects().iter().map(|d| d.uri().to_string()).collect(),
            homepage: identity.homepage,
            documentation: identity.documentation,
            issues: identity.issues,
            source: identity.source,
            os: Some(std::env::consts::OS.to_string()),
            os_version: os_release(),
            language_version: None,
            links: identity.links,
        }
    }
}

#[cfg(target_os = "linux")]
fn os_release() -> Option<String> {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn os_release() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::JsonSchemaEngine;

    #[test]
    fn test_describe_jsonschema() {
        let meta = ImplementationMetadata::describe(&JsonSchemaEngine::new());
        assert_eq!(meta.language, "rust");
        assert_eq!(meta.name, "jsonschema");
        assert_eq!(meta.dialects.len(), 5);
        assert_eq!(meta.dialects[0], "https://json-schema.org/draft/2020-12/schema");
        assert!(meta.os.is_some());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let mut meta = ImplementationMetadata::describe(&JsonSchemaEngine::new());
        meta.os_version = None;
        meta.language_version = None;
        meta.links.clear();
        let value = serde_json::to_value(&meta).unwrap();
        assert!(value.get("os_version").is_none());
        assert!(value.get("links").is_none());
        assert!(value["homepage"].is_string());
        assert!(value["dialects"].is_array());
    }
}
