use crate::TURN_TIMEOUT;
use crate::lobby::Matchmaker;
use std::time::Duration;

/// Tunables shared by every session the arena forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub timeout: Duration,
    pub matchmaker: Matchmaker,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(TURN_TIMEOUT),
            matchmaker: Matchmaker::default(),
        }
    }
}

impl Settings {
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}
