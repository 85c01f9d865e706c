use crate::PlayerId;
use crate::registry::Player;

/// A player's place in a session roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: PlayerId,
    name: String,
}

impl Seat {
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<Player> for Seat {
    fn from(player: Player) -> Self {
        Self::new(player.id(), player.name())
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
