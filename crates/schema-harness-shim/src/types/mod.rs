//! Wire types for the harness protocol.

pub mod command;
pub mod error;
pub mod response;

pub use command::*;
pub use error::*;
pub use response::*;

/// The only protocol version this shim speaks.
pub const PROTOCOL_VERSION: i64 = 1;
