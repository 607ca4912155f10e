//! Transport layer for protocol communication.

pub mod framing;
pub mod stdio;

pub use stdio::StdioTransport;
