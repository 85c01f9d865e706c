use crate::PlayerId;
use crate::SessionId;

/// A registered participant.
/// Only the session reference changes after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    session: Option<SessionId>,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            session: None,
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// None while still waiting in the lobby.
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }
    pub fn seat(&mut self, session: SessionId) {
        self.session = Some(session);
    }
}
