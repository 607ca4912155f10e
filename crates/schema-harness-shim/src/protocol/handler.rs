//! Command dispatcher: routes decoded commands to handlers.

use serde_json::Value;

use schema_harness::{normalize_uri, CaseRunner, Dialect, Engine, ImplementationMetadata};

use crate::types::*;

use super::negotiation::negotiate;
use super::session::{ActiveDialect, Session};
use super::validator::validate_command;

/// What the transport should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Write this value as one line.
    Respond(Value),
    /// End the session without writing anything.
    Stop,
}

/// The protocol state machine. Handles one command at a time.
pub struct Dispatcher<E> {
    runner: CaseRunner<E>,
    metadata: ImplementationMetadata,
    session: Session,
}

impl<E: Engine> Dispatcher<E> {
    pub fn new(runner: CaseRunner<E>) -> Self {
        let metadata = ImplementationMetadata::describe(runner.engine());
        Self {
            runner,
            metadata,
            session: Session::new(),
        }
    }

    pub fn metadata(&self) -> &ImplementationMetadata {
        &self.metadata
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one command. Any error is fatal to the session.
    pub fn handle(&mut self, command: Command) -> ShimResult<Reply> {
        validate_command(&self.session, &command)?;

        match command {
            Command::Start(_) => self.handle_start(),
            Command::Dialect(params) => self.handle_dialect(params),
            Command::Run(params) => self.handle_run(params),
            Command::Stop => {
                tracing::info!("Stop requested");
                self.session.stop();
                Ok(Reply::Stop)
            }
        }
    }

    fn handle_start(&mut self) -> ShimResult<Reply> {
        let result = negotiate(&mut self.session, &self.metadata);
        respond(&result)
    }

    fn handle_dialect(&mut self, params: DialectParams) -> ShimResult<Reply> {
        let uri = normalize_uri(&params.dialect)?;
        let dialect = Dialect::from_uri(&uri)?;
        let ok = dialect.is_some_and(|d| self.runner.engine().supports(d));

        if ok {
            tracing::info!("Dialect set to {uri}");
        } else {
            tracing::warn!("Dialect {uri} is not supported");
        }

        self.session.select_dialect(ActiveDialect { uri, dialect });
        respond(&DialectResult { ok })
    }

    fn handle_run(&mut self, params: RunParams) -> ShimResult<Reply> {
        let active = self.session.active_dialect();
        tracing::debug!(
            "Running case {} ({} tests)",
            params.case.description.as_deref().unwrap_or("<unnamed>"),
            params.case.tests.len()
        );

        let outcome = self.runner.run(&params.case, active);
        respond(&RunResult {
            seq: params.seq,
            outcome,
        })
    }
}

fn respond<T: serde::Serialize>(response: &T) -> ShimResult<Reply> {
    Ok(Reply::Respond(serde_json::to_value(response)?))
}
