//! Runs one test case against an engine with all-results-or-one-error semantics.

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::Context;

use crate::dialect::{ActiveDialect, Dialect};
use crate::engine::Engine;
use crate::registry::SchemaRegistry;
use crate::skips::KnownIssues;
use crate::types::{CaseResult, ErrorContext, HarnessError, SkipReason, TestCase, TestResult};

/// Drives an engine through test cases.
pub struct CaseRunner<E> {
    engine: E,
    known_issues: KnownIssues,
}

impl<E: Engine> CaseRunner<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            known_issues: KnownIssues::default(),
        }
    }

    pub fn with_known_issues(mut self, known_issues: KnownIssues) -> Self {
        self.known_issues = known_issues;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run every test in `case`.
    ///
    /// `active` is the dialect selected by the orchestrator, if any; it is the
    /// default for schemas that do not declare `$schema`. A selected dialect
    /// this engine cannot run, known or not, skips the case. Never fails:
    /// compile and evaluation errors, including engine panics, become
    /// [`CaseResult::Errored`].
    pub fn run(&self, case: &TestCase, active: Option<&ActiveDialect>) -> CaseResult {
        if let Some(reason) = case
            .description
            .as_deref()
            .and_then(|d| self.known_issues.lookup(d))
        {
            tracing::info!("Skipping known issue: {}", reason.message);
            return CaseResult::Skipped(reason.clone());
        }

        let Some(dialect) = self.effective_dialect(case, active) else {
            let message = match active {
                Some(a) => {
                    format!("{} is not supported by {}", a.uri, self.engine.identity().name)
                }
                None => "no supported dialect for this case".to_string(),
            };
            return CaseResult::Skipped(SkipReason {
                message,
                issue_url: None,
            });
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| self.run_tests(case, dialect)))
            .unwrap_or_else(|payload| Err(HarnessError::Panic(panic_message(&*payload)).into()));

        match outcome {
            Ok(results) => CaseResult::Executed(results),
            Err(err) => {
                tracing::debug!("Case errored: {err:#}");
                CaseResult::Errored(ErrorContext::from_error(&err))
            }
        }
    }

    fn effective_dialect(
        &self,
        case: &TestCase,
        active: Option<&ActiveDialect>,
    ) -> Option<Dialect> {
        if let Some(declared) = Dialect::declared_by(&case.schema) {
            if self.engine.supports(declared) {
                return Some(declared);
            }
        }
        match active {
            Some(ActiveDialect {
                dialect: Some(d), ..
            }) if self.engine.supports(*d) => Some(*d),
            Some(_) => None,
            None => self.engine.default_dialect(),
        }
    }

    fn run_tests(&self, case: &TestCase, dialect: Dialect) -> anyhow::Result<Vec<TestResult>> {
        let mut registry = SchemaRegistry::new();
        if let Some(entries) = &case.registry {
            for (uri, schema) in entries {
                registry.register(uri, schema.clone())?;
            }
        }

        let compiled = self
            .engine
            .compile(&case.schema, &registry, dialect)
            .with_context(|| format!("compiling schema as {}", dialect.short_name()))?;

        case.tests
            .iter()
            .enumerate()
            .map(|(i, test)| {
                compiled
                    .is_valid(&test.instance)
                    .map(|valid| TestResult { valid })
                    .with_context(|| format!("evaluating test {i}"))
            })
            .collect()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
