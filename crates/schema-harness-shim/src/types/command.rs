//! Commands read from the orchestrator, one per line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use schema_harness::TestCase;

/// The closed set of command tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Start,
    Dialect,
    Run,
    Stop,
}

impl CommandKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "start" => Some(CommandKind::Start),
            "dialect" => Some(CommandKind::Dialect),
            "run" => Some(CommandKind::Run),
            "stop" => Some(CommandKind::Stop),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CommandKind::Start => "start",
            CommandKind::Dialect => "dialect",
            CommandKind::Run => "run",
            CommandKind::Stop => "stop",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartParams {
    pub version: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialectParams {
    pub dialect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    /// Opaque correlation token, echoed back untouched.
    pub seq: Value,
    pub case: TestCase,
}

/// A decoded command.
#[derive(Debug, Clone)]
pub enum Command {
    Start(StartParams),
    Dialect(DialectParams),
    Run(RunParams),
    Stop,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Start(_) => CommandKind::Start,
            Command::Dialect(_) => CommandKind::Dialect,
            Command::Run(_) => CommandKind::Run,
            Command::Stop => CommandKind::Stop,
        }
    }
}
