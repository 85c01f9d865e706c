use super::Seat;

/// Why a player was removed from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Timeout,
    Unknown(String),
    Repeated(String),
    Mismatch { word: String, expected: char },
}

/// Outcome of one completed turn. Exactly one per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { seat: Seat, word: String },
    Eliminated { seat: Seat, violation: Violation },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "no move before the deadline"),
            Self::Unknown(word) => write!(f, "'{}' is not a known city", word),
            Self::Repeated(word) => write!(f, "'{}' was already named", word),
            Self::Mismatch { word, expected } => {
                write!(f, "'{}' does not start with '{}'", word, expected.to_uppercase())
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { seat, word } => write!(f, "accepted '{}' from {}", word, seat),
            Self::Eliminated { seat, violation } => write!(f, "eliminated {}: {}", seat, violation),
        }
    }
}
