//! Session state: whether the handshake happened and which dialect is active.

pub use schema_harness::ActiveDialect;

/// Lifecycle of one protocol session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Started,
    Stopped,
}

/// Per-process session. Owned and mutated only by the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    dialect: Option<ActiveDialect>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state == SessionState::Started
    }

    /// Complete the handshake. Returns `true` if it had already completed.
    pub fn start(&mut self) -> bool {
        let already = self.is_started();
        self.state = SessionState::Started;
        already
    }

    pub fn select_dialect(&mut self, active: ActiveDialect) {
        self.dialect = Some(active);
    }

    pub fn active_dialect(&self) -> Option<&ActiveDialect> {
        self.dialect.as_ref()
    }

    pub fn stop(&mut self) {
        self.state = SessionState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_harness::Dialect;

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(!session.is_started());
        assert!(session.active_dialect().is_none());
    }

    #[test]
    fn test_start_twice() {
        let mut session = Session::new();
        assert!(!session.start());
        assert!(session.start());
        assert!(session.is_started());
    }

    #[test]
    fn test_dialect_survives_restart() {
        let mut session = Session::new();
        session.start();
        session.select_dialect(Dialect::Draft7.into());
        session.start();
        assert_eq!(
            session.active_dialect().and_then(|a| a.dialect),
            Some(Dialect::Draft7)
        );
    }

    #[test]
    fn test_stop() {
        let mut session = Session::new();
        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
    }
}
