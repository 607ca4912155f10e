//! Schema Harness: core library for driving a JSON Schema engine through conformance test cases.

pub mod dialect;
pub mod engine;
pub mod metadata;
pub mod registry;
pub mod runner;
pub mod skips;
pub mod types;
pub mod validator;

pub use dialect::{normalize_uri, ActiveDialect, Dialect};
pub use engine::{CompiledSchema, Engine, EngineIdentity, Link};
pub use metadata::ImplementationMetadata;
pub use registry::SchemaRegistry;
pub use runner::CaseRunner;
pub use skips::KnownIssues;
pub use types::*;
pub use validator::JsonSchemaEngine;
