//! Core data types for test cases, their outcomes, and harness errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single test case sent by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub schema: Value,
    /// Additional schemas resolvable by reference, keyed by URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<BTreeMap<String, Value>>,
    pub tests: Vec<Test>,
}

/// One instance to evaluate against the case's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Test {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub instance: Value,
    /// Expected validity. Only the orchestrator compares against this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

/// Actual validity of one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub valid: bool,
}

/// Diagnostic payload for a case that could not be run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub message: String,
    pub traceback: String,
}

impl ErrorContext {
    /// Build a context from an error chain. The message is the one-line
    /// chain; the traceback is the full debug rendering.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
            traceback: format!("{err:?}"),
        }
    }
}

/// Why a case was not run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipReason {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_url: Option<String>,
}

/// The outcome of running one test case.
///
/// A case either produces one result per test, in order, or a single
/// error for the whole case. It never produces a partial result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult {
    Executed(Vec<TestResult>),
    Errored(ErrorContext),
    Skipped(SkipReason),
}

impl CaseResult {
    pub fn is_errored(&self) -> bool {
        matches!(self, CaseResult::Errored(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CaseResult::Skipped(_))
    }

    /// Per-test results, if the case ran to completion.
    pub fn results(&self) -> Option<&[TestResult]> {
        match self {
            CaseResult::Executed(results) => Some(results),
            _ => None,
        }
    }
}

/// Errors that can occur in the harness core.
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("Invalid URI {uri:?}: {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Invalid registry entry {uri:?}: {reason}")]
    RegistryEntry { uri: String, reason: String },

    #[error("Schema compilation failed: {0}")]
    Compile(String),

    #[error("Evaluation failed: {0}")]
    Evaluate(String),

    #[error("Engine panicked: {0}")]
    Panic(String),

    #[error("Known issues file error: {0}")]
    KnownIssues(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type HarnessResult<T> = Result<T, HarnessError>;
