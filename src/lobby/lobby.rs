use super::Matchmaker;
use crate::PlayerId;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// FIFO queue of registered players not yet assigned to a session.
/// Guarded by its own lock, independent of every session's.
#[derive(Debug, Default)]
pub struct Lobby {
    queue: Mutex<VecDeque<PlayerId>>,
    matchmaker: Matchmaker,
}

impl Lobby {
    pub fn new(matchmaker: Matchmaker) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            matchmaker,
        }
    }
    pub async fn push(&self, id: PlayerId) {
        self.queue.lock().await.push_back(id);
    }
    /// Take the next group if enough players wait.
    /// The lock is released before the caller builds the session.
    pub async fn draw(&self) -> Option<Vec<PlayerId>> {
        self.matchmaker.draw(&mut *self.queue.lock().await)
    }
    #[cfg(test)]
    pub async fn waiting(&self) -> Vec<PlayerId> {
        self.queue.lock().await.iter().copied().collect()
    }
}
