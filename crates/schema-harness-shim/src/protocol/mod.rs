//! Protocol handling: session state and command dispatch.

pub mod handler;
pub mod negotiation;
pub mod session;
pub mod validator;

pub use handler::{Dispatcher, Reply};
pub use session::{ActiveDialect, Session, SessionState};
