use super::*;
use crate::PlayerId;
use crate::SessionId;
use crate::gazetteer::Gazetteer;
use crate::lobby::Lobby;
use crate::registry::Registry;
use crate::session::Seat;
use crate::session::Session;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::RwLock;

/// Owns every player, the lobby and every session ever formed.
/// Sessions are kept after they finish so their result stays readable.
#[derive(Debug)]
pub struct Arena {
    settings: Settings,
    gazetteer: Arc<Gazetteer>,
    registry: Registry,
    lobby: Lobby,
    sessions: RwLock<HashMap<SessionId, Arc<Session>>>,
    count: AtomicU64,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Gazetteer::default(), Settings::default())
    }
}

impl Arena {
    pub fn new(gazetteer: Gazetteer, settings: Settings) -> Self {
        Self {
            settings,
            gazetteer: Arc::new(gazetteer),
            registry: Registry::default(),
            lobby: Lobby::new(settings.matchmaker),
            sessions: RwLock::new(HashMap::new()),
            count: AtomicU64::new(1),
        }
    }
    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }
    pub async fn session(&self, id: SessionId) -> Option<Arc<Session>> {
        self.sessions.read().await.get(&id).cloned()
    }
}

impl Arena {
    /// Enroll a player, queue them, and form sessions until the lobby
    /// holds fewer than the minimum.
    pub async fn register(&self, name: &str) -> PlayerId {
        let id = self.registry.enroll(name).await;
        self.lobby.push(id).await;
        log::info!("[arena] registered {} as player {}", name, id);
        while self.matchmake().await.is_some() {}
        id
    }

    /// Where a player stands right now.
    pub async fn status(&self, player: PlayerId) -> Result<Status, ArenaError> {
        match self.seated(player).await? {
            None => Ok(Status::waiting()),
            Some(session) => Ok(session
                .inspect(|table| Status::project(session.id(), table, player))
                .await),
        }
    }

    /// Hand a move to the player's session.
    /// Legality is judged later by the turn loop, not here.
    pub async fn submit(&self, player: PlayerId, word: &str) -> Result<Reply, ArenaError> {
        match self.seated(player).await? {
            None => Ok(Reply::Unseated),
            Some(session) => Ok(session
                .submit(player, word)
                .await
                .map_or_else(Reply::from, Reply::Accepted)),
        }
    }

    /// Draw one group from the lobby and start its session.
    /// The lobby lock is already released when the session is built.
    pub async fn matchmake(&self) -> Option<SessionId> {
        let ids = self.lobby.draw().await?;
        let id = self.count.fetch_add(1, Ordering::Relaxed);
        let roster = self
            .registry
            .lookup(&ids)
            .await
            .into_iter()
            .map(Seat::from)
            .collect::<Vec<_>>();
        let session = Arc::new(Session::new(
            id,
            roster,
            self.gazetteer.clone(),
            self.settings.timeout,
        ));
        self.sessions.write().await.insert(id, session.clone());
        self.registry.seat(&ids, id).await;
        session.spawn();
        log::info!("[arena] formed session {} with players {:?}", id, ids);
        Some(id)
    }
}

impl Arena {
    /// The player's session, None while waiting.
    async fn seated(&self, player: PlayerId) -> Result<Option<Arc<Session>>, ArenaError> {
        match self
            .registry
            .get(player)
            .await
            .ok_or(ArenaError::UnknownPlayer(player))?
            .session()
        {
            None => Ok(None),
            Some(id) => self
                .session(id)
                .await
                .map(Some)
                .ok_or(ArenaError::UnknownSession(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Turn;
    use std::time::Duration;

    async fn trio(arena: &Arena) -> (PlayerId, PlayerId, PlayerId) {
        (
            arena.register("A").await,
            arena.register("B").await,
            arena.register("C").await,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_player_is_an_error() {
        let arena = Arena::default();
        assert_eq!(arena.status(7).await, Err(ArenaError::UnknownPlayer(7)));
        assert_eq!(arena.submit(7, "москва").await, Err(ArenaError::UnknownPlayer(7)));
    }
    #[tokio::test(start_paused = true)]
    async fn players_wait_until_three_register() {
        let arena = Arena::default();
        let a = arena.register("A").await;
        let b = arena.register("B").await;
        assert_eq!(arena.status(a).await, Ok(Status::waiting()));
        assert_eq!(arena.submit(b, "москва").await, Ok(Reply::Unseated));
        let c = arena.register("C").await;
        let session = arena.session(1).await.expect("session formed");
        assert_eq!(*session.subscribe().borrow(), Turn::Awaiting { turn: 0, player: a });
        assert_eq!(
            arena.status(c).await,
            Ok(Status::InGame {
                session_id: 1,
                current_city: None,
                your_turn: false,
                players: vec!["A".into(), "B".into(), "C".into()],
            })
        );
    }
    #[tokio::test(start_paused = true)]
    async fn wrong_turn_leaves_state_untouched() {
        let arena = Arena::default();
        let (_, b, _) = trio(&arena).await;
        assert_eq!(arena.submit(b, "москва").await, Ok(Reply::NotYourTurn));
        let session = arena.session(1).await.expect("session formed");
        assert_eq!(session.inspect(|t| t.pending().map(String::from)).await, None);
    }
    #[tokio::test(start_paused = true)]
    async fn full_game_then_stable_result() {
        let arena = Arena::default();
        let (a, b, c) = trio(&arena).await;
        let session = arena.session(1).await.expect("session formed");
        let mut turns = session.subscribe();
        assert_eq!(
            arena.submit(a, "Москва").await,
            Ok(Reply::Accepted("москва".to_string()))
        );
        turns.wait_for(|t| *t == Turn::Awaiting { turn: 1, player: b }).await.expect("B's turn");
        assert!(matches!(
            arena.status(b).await,
            Ok(Status::InGame { your_turn: true, ref current_city, .. }) if current_city.as_deref() == Some("москва")
        ));
        arena.submit(b, "москва").await.expect("registered");
        turns.wait_for(|t| *t == Turn::Awaiting { turn: 2, player: c }).await.expect("C's turn");
        assert!(matches!(
            arena.status(b).await,
            Ok(Status::InGame { ref players, your_turn: false, .. }) if players == &["A".to_string(), "C".to_string()]
        ));
        arena.submit(c, "архангельск").await.expect("registered");
        turns.wait_for(|t| *t == Turn::Awaiting { turn: 3, player: a }).await.expect("A's turn");
        turns.wait_for(Turn::is_over).await.expect("game over");
        let expected = Status::GameOver {
            message: Status::GAME_OVER,
            winner: Some("C".to_string()),
            eliminated: vec!["B".into(), "A".into()],
        };
        for _ in 0..3 {
            for player in [a, b, c] {
                assert_eq!(arena.status(player).await, Ok(expected.clone()));
            }
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        assert_eq!(arena.submit(c, "краснодар").await, Ok(Reply::Finished));
    }
    #[tokio::test(start_paused = true)]
    async fn later_registrants_form_their_own_session() {
        let arena = Arena::default();
        trio(&arena).await;
        let (d, _, _) = trio(&arena).await;
        assert!(matches!(
            arena.status(d).await,
            Ok(Status::InGame { session_id: 2, your_turn: true, .. })
        ));
    }
    #[tokio::test(start_paused = true)]
    async fn matchmake_draws_up_to_five() {
        let arena = Arena::new(Gazetteer::default(), Settings::default());
        for name in ["A", "B", "C", "D", "E"] {
            let id = arena.registry.enroll(name).await;
            arena.lobby.push(id).await;
        }
        assert_eq!(arena.matchmake().await, Some(1));
        let session = arena.session(1).await.expect("session formed");
        assert_eq!(session.inspect(|t| t.roster().len()).await, 5);
        assert_eq!(arena.matchmake().await, None);
    }
    #[tokio::test(start_paused = true)]
    async fn concurrent_registrations_seat_everyone_once() {
        let arena = Arc::new(Arena::default());
        let tasks = (0..13)
            .map(|i| {
                let arena = arena.clone();
                tokio::spawn(async move { arena.register(&format!("P{}", i)).await })
            })
            .collect::<Vec<_>>();
        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.expect("register task"));
        }
        ids.sort();
        assert_eq!(ids, (1..=13).collect::<Vec<_>>());
        let waiting = arena.lobby.waiting().await;
        assert!(waiting.len() < 3);
        let mut seated = Vec::new();
        let mut capacity = 0;
        for id in 1..arena.count.load(Ordering::Relaxed) {
            let session = arena.session(id).await.expect("session formed");
            let size = session
                .inspect(|t| t.roster().len() + t.eliminated().len())
                .await;
            assert!((3..=5).contains(&size));
            capacity += size;
            for player in 1..=13 {
                if arena.registry.get(player).await.and_then(|p| p.session()) == Some(id) {
                    seated.push(player);
                }
            }
        }
        assert_eq!(seated.len(), capacity);
        assert_eq!(seated.len() + waiting.len(), 13);
        for player in waiting {
            assert_eq!(arena.status(player).await, Ok(Status::waiting()));
        }
    }
    #[tokio::test(start_paused = true)]
    async fn dangling_session_reference_is_reported() {
        let arena = Arena::default();
        let id = arena.registry.enroll("ghost").await;
        arena.registry.seat(&[id], 9).await;
        assert_eq!(arena.status(id).await, Err(ArenaError::UnknownSession(9)));
        assert_eq!(arena.submit(id, "омск").await, Err(ArenaError::UnknownSession(9)));
    }
}
