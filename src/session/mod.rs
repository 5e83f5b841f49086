pub mod command;
pub mod coordinator;

pub use command::{ClientCommand, SwitchProviderRequest};
pub use coordinator::SessionCoordinator;

use std::fmt;
use thiserror::Error;

/// Identifies one connected client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Client requests rejected at the session boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),

    #[error("speed multiplier must be a positive number, got {0}")]
    InvalidSpeed(f64),

    #[error("invalid flight file name {0:?}")]
    InvalidFileName(String),
}

/// Speeds accepted from clients
pub fn validate_speed(speed: f64) -> Result<f64, SessionError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(SessionError::InvalidSpeed(speed))
    }
}
