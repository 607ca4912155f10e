//! Schema Harness Shim: drives a JSON Schema engine over a line-delimited stdio protocol.

pub mod config;
pub mod protocol;
pub mod transport;
pub mod types;

pub use config::resolve_skips_path;
pub use protocol::Dispatcher;
pub use transport::StdioTransport;
