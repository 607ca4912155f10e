//! Precondition checks for commands against the session state.

use crate::types::{Command, ShimError, ShimResult, PROTOCOL_VERSION};

use super::session::{Session, SessionState};

/// Validate that `command` is acceptable in the current session.
pub fn validate_command(session: &Session, command: &Command) -> ShimResult<()> {
    match (session.state(), command) {
        (SessionState::Stopped, _) => Err(ShimError::ProtocolViolation(format!(
            "received {} after stop",
            command.kind().tag()
        ))),
        (_, Command::Start(params)) if params.version != PROTOCOL_VERSION => {
            Err(ShimError::UnsupportedProtocolVersion(params.version))
        }
        (SessionState::Uninitialized, Command::Dialect(_) | Command::Run(_)) => Err(
            ShimError::ProtocolViolation(format!("{} before start: not started", command.kind().tag())),
        ),
        _ => Ok(()),
    }
}
