use super::Table;
use crate::PlayerId;

/// Announcement published whenever a session changes hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// `turn` counts completed turns before this one.
    Awaiting { turn: u64, player: PlayerId },
    Over { winner: Option<PlayerId> },
}

impl Turn {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }
}

impl From<&Table> for Turn {
    fn from(table: &Table) -> Self {
        match table.active() {
            Some(seat) => Self::Awaiting {
                turn: table.turns(),
                player: seat.id(),
            },
            None => Self::Over {
                winner: table.winner().map(|s| s.id()),
            },
        }
    }
}
