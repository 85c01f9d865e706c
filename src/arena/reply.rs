use crate::session::Refusal;

/// Answer to a move submission.
/// Only `Accepted` means the move reached the mailbox; it says nothing
/// about whether the move is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Accepted(String),
    NotYourTurn,
    Unseated,
    Finished,
}

impl From<Refusal> for Reply {
    fn from(refusal: Refusal) -> Self {
        match refusal {
            Refusal::NotYourTurn => Self::NotYourTurn,
            Refusal::Finished => Self::Finished,
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted(word) => write!(f, "your move '{}' was received", word),
            Self::NotYourTurn => write!(f, "it is not your turn"),
            Self::Unseated => write!(f, "you have not joined a game session yet"),
            Self::Finished => write!(f, "the game is over"),
        }
    }
}
