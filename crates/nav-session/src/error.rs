//! Session error type.

use nav_core::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The worker is gone — the session was stopped or its thread exited.
    #[error("navigation session already stopped")]
    Stopped,

    #[error("invalid route: {0}")]
    InvalidRoute(#[from] NavError),

    #[error("failed to spawn session worker: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
