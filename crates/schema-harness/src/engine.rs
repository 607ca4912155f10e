//! The seam between the harness and a JSON Schema validation engine.

use serde_json::Value;

use crate::dialect::Dialect;
use crate::registry::SchemaRegistry;
use crate::types::HarnessResult;

/// An informational link advertised in the handshake.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub description: String,
    pub url: String,
}

/// Static identity of a validation engine.
#[derive(Debug, Clone)]
pub struct EngineIdentity {
    pub name: String,
    pub version: String,
    pub homepage: String,
    pub documentation: String,
    pub issues: String,
    pub source: String,
    pub links: Vec<Link>,
}

/// A schema compiled by an engine, ready to evaluate instances.
pub trait CompiledSchema {
    fn is_valid(&self, instance: &Value) -> HarnessResult<bool>;
}

/// A JSON Schema validation engine.
pub trait Engine {
    fn identity(&self) -> EngineIdentity;

    /// Dialects the engine can compile, newest first.
    fn dialects(&self) -> &[Dialect];

    /// Compile `schema` with `dialect` as the default, resolving references
    /// against `registry` only.
    fn compile<'a>(
        &'a self,
        schema: &Value,
        registry: &SchemaRegistry,
        dialect: Dialect,
    ) -> HarnessResult<Box<dyn CompiledSchema + 'a>>;

    fn supports(&self, dialect: Dialect) -> bool {
        self.dialects().contains(&dialect)
    }

    /// The dialect used when nothing else names one.
    fn default_dialect(&self) -> Option<Dialect> {
        self.dialects().first().copied()
    }
}
