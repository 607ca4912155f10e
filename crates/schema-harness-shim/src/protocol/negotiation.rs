//! The `start` handshake.

use schema_harness::ImplementationMetadata;

use crate::types::{StartResult, PROTOCOL_VERSION};

use super::session::Session;

/// Complete the handshake and build the `start` response.
///
/// The version has already been validated. A repeated `start` is answered
/// again with the same metadata and leaves the active dialect in place.
pub fn negotiate(session: &mut Session, metadata: &ImplementationMetadata) -> StartResult {
    if session.start() {
        tracing::warn!("Duplicate start; answering again");
    } else {
        tracing::info!(
            "Handshake complete: {} {} ({} dialects)",
            metadata.name,
            metadata.version,
            metadata.dialects.len()
        );
    }

    StartResult {
        version: PROTOCOL_VERSION,
        implementation: metadata.clone(),
    }
}
