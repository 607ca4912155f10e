//! Engine backed by the `jsonschema` crate.

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::dialect::Dialect;
use crate::engine::{CompiledSchema, Engine, EngineIdentity, Link};
use crate::registry::SchemaRegistry;
use crate::types::{HarnessError, HarnessResult};

/// Version of the `jsonschema` crate this engine is built against.
///
/// Cargo exposes no version metadata for dependencies, so this tracks the
/// exact `=` pin in this crate's Cargo.toml. A unit test fails if they differ.
pub const ENGINE_VERSION: &str = "0.30.0";

const SUPPORTED: [Dialect; 5] = [
    Dialect::Draft202012,
    Dialect::Draft201909,
    Dialect::Draft7,
    Dialect::Draft6,
    Dialect::Draft4,
];

/// The `jsonschema` engine. References resolve only against the per-run
/// registry and the bundled meta-schemas; nothing is fetched.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaEngine;

impl JsonSchemaEngine {
    pub fn new() -> Self {
        Self
    }
}

fn draft_for(dialect: Dialect) -> HarnessResult<Draft> {
    match dialect {
        Dialect::Draft202012 => Ok(Draft::Draft202012),
        Dialect::Draft201909 => Ok(Draft::Draft201909),
        Dialect::Draft7 => Ok(Draft::Draft7),
        Dialect::Draft6 => Ok(Draft::Draft6),
        Dialect::Draft4 => Ok(Draft::Draft4),
        Dialect::Draft3 => Err(HarnessError::Compile(format!(
            "{dialect} is not supported by jsonschema"
        ))),
    }
}

/// Pick the draft for a document: its own `$schema` if supported, else the default.
fn resolve_draft(schema: &Value, default: Dialect) -> HarnessResult<Draft> {
    match Dialect::declared_by(schema) {
        Some(declared) if SUPPORTED.contains(&declared) => draft_for(declared),
        _ => draft_for(default),
    }
}

struct JsonSchemaCompiled {
    validator: Validator,
}

impl CompiledSchema for JsonSchemaCompiled {
    fn is_valid(&self, instance: &Value) -> HarnessResult<bool> {
        Ok(self.validator.is_valid(instance))
    }
}

impl Engine for JsonSchemaEngine {
    fn identity(&self) -> EngineIdentity {
        EngineIdentity {
            name: "jsonschema".to_string(),
            version: ENGINE_VERSION.to_string(),
            homepage: "https://docs.rs/jsonschema".to_string(),
            documentation: "https://docs.rs/jsonschema".to_string(),
            issues: "https://github.com/Stranger6667/jsonschema/issues".to_string(),
            source: "https://github.com/Stranger6667/jsonschema".to_string(),
            links: vec![Link {
                description: "crates.io".to_string(),
                url: "https://crates.io/crates/jsonschema".to_string(),
            }],
        }
    }

    fn dialects(&self) -> &[Dialect] {
        &SUPPORTED
    }

    fn compile<'a>(
        &'a self,
        schema: &Value,
        registry: &SchemaRegistry,
        dialect: Dialect,
    ) -> HarnessResult<Box<dyn CompiledSchema + 'a>> {
        let draft = resolve_draft(schema, dialect)?;

        let mut resources = Vec::with_capacity(registry.len());
        for (uri, contents) in registry.iter() {
            let resource_draft = resolve_draft(contents, dialect)?;
            resources.push((uri.to_string(), resource_draft.create_resource(contents.clone())));
        }

        tracing::debug!(
            "Compiling schema as {:?} with {} registry entries",
            draft,
            resources.len()
        );

        let validator = jsonschema::options()
            .with_draft(draft)
            .with_resources(resources.into_iter())
            .build(schema)
            .map_err(|e| HarnessError::Compile(e.to_string()))?;

        Ok(Box::new(JsonSchemaCompiled { validator }))
    }
}
