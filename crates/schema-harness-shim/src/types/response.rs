//! Responses written back to the orchestrator.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use schema_harness::{CaseResult, ImplementationMetadata};

#[derive(Debug, Clone, serde::Serialize)]
pub struct StartResult {
    pub version: i64,
    pub implementation: ImplementationMetadata,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct DialectResult {
    pub ok: bool,
}

/// Response to `run`: the echoed `seq` plus exactly one outcome shape.
///
/// ```text
/// {"seq": ..., "results": [{"valid": true}, ...]}
/// {"seq": ..., "errored": true, "context": {"message": ..., "traceback": ...}}
/// {"seq": ..., "skipped": true, "message": ..., "issue_url": ...}
/// ```
#[derive(Debug, Clone)]
pub struct RunResult {
    pub seq: Value,
    pub outcome: CaseResult,
}

impl Serialize for RunResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("seq", &self.seq)?;
        match &self.outcome {
            CaseResult::Executed(results) => {
                map.serialize_entry("results", results)?;
            }
            CaseResult::Errored(context) => {
                map.serialize_entry("errored", &true)?;
                map.serialize_entry("context", context)?;
            }
            CaseResult::Skipped(reason) => {
                map.serialize_entry("skipped", &true)?;
                map.serialize_entry("message", &reason.message)?;
                if let Some(url) = &reason.issue_url {
                    map.serialize_entry("issue_url", url)?;
                }
            }
        }
        map.end()
    }
}
