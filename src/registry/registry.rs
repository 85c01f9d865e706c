use super::Player;
use crate::PlayerId;
use crate::SessionId;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::RwLock;

/// Every player ever registered, keyed by id.
/// Entries are never removed, so ids stay resolvable for the process lifetime.
#[derive(Debug)]
pub struct Registry {
    players: RwLock<HashMap<PlayerId, Player>>,
    count: AtomicU64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
            count: AtomicU64::new(1),
        }
    }
}

impl Registry {
    /// Create a player under a fresh id.
    pub async fn enroll(&self, name: &str) -> PlayerId {
        let id = self.count.fetch_add(1, Ordering::Relaxed);
        self.players
            .write()
            .await
            .insert(id, Player::new(id, name.to_string()));
        id
    }
    pub async fn get(&self, id: PlayerId) -> Option<Player> {
        self.players.read().await.get(&id).cloned()
    }
    /// Records in queue order, skipping unknown ids.
    pub async fn lookup(&self, ids: &[PlayerId]) -> Vec<Player> {
        let players = self.players.read().await;
        ids.iter().filter_map(|id| players.get(id).cloned()).collect()
    }
    /// Point every listed player at their new session.
    pub async fn seat(&self, ids: &[PlayerId], session: SessionId) {
        let mut players = self.players.write().await;
        for id in ids {
            if let Some(player) = players.get_mut(id) {
                player.seat(session);
            }
        }
    }
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }
}
