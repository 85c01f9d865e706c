use crate::PlayerId;
use crate::SessionId;

/// Lookups that fail before any game logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    UnknownPlayer(PlayerId),
    /// Registry points at a session the arena does not hold.
    UnknownSession(SessionId),
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlayer(id) => write!(f, "player {} is not registered", id),
            Self::UnknownSession(id) => write!(f, "session {} not found", id),
        }
    }
}

impl std::error::Error for ArenaError {}
