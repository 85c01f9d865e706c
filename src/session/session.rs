use super::*;
use crate::PlayerId;
use crate::SessionId;
use crate::gazetteer::Gazetteer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::watch;
use tokio::time::Instant;

/// One running game among a fixed initial roster.
///
/// The turn loop ([`Session::run`]) is the only writer of roster and pointer.
/// Callers touch the table through [`Session::submit`] (the mailbox slot)
/// and [`Session::inspect`] (read-only snapshots). The loop never holds the
/// table lock across an await, so neither blocks on a pending turn.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    timeout: Duration,
    gazetteer: Arc<Gazetteer>,
    table: Mutex<Table>,
    mailbox: Mailbox,
    turns: watch::Sender<Turn>,
}

impl Session {
    pub fn new(id: SessionId, roster: Vec<Seat>, gazetteer: Arc<Gazetteer>, timeout: Duration) -> Self {
        let table = Table::new(roster);
        let (turns, _) = watch::channel(Turn::from(&table));
        Self {
            id,
            timeout,
            gazetteer,
            table: Mutex::new(table),
            mailbox: Mailbox::default(),
            turns,
        }
    }
    pub fn id(&self) -> SessionId {
        self.id
    }
    /// Start the turn loop on its own task.
    pub fn spawn(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.clone().run())
    }
    /// Follow turn announcements. The current turn is visible immediately.
    pub fn subscribe(&self) -> watch::Receiver<Turn> {
        self.turns.subscribe()
    }
    /// Leave a move for the active player and wake the loop.
    /// Returns the normalized word that was deposited.
    pub async fn submit(&self, player: PlayerId, word: &str) -> Result<String, Refusal> {
        let word = self.table.lock().await.deposit(player, word)?;
        self.mailbox.ring();
        Ok(word)
    }
    /// Read a consistent snapshot of the table.
    pub async fn inspect<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Table) -> T,
    {
        f(&*self.table.lock().await)
    }
}

impl Session {
    pub async fn run(self: Arc<Self>) {
        log::info!("[session {}] started with {}", self.id, self.inspect(Self::lineup).await);
        while let Some(seat) = self.inspect(|t| t.active().cloned()).await {
            log::info!("[session {}] {} to move", self.id, seat);
            let deadline = Instant::now() + self.timeout;
            self.mailbox.wait(&self.table, deadline).await;
            let mut table = self.table.lock().await;
            match table.resolve(&self.gazetteer) {
                Some(verdict @ Verdict::Accepted { .. }) => log::info!("[session {}] {}", self.id, verdict),
                Some(verdict) => log::warn!("[session {}] {}", self.id, verdict),
                None => break,
            }
            self.turns.send_replace(Turn::from(&*table));
        }
        self.inspect(|t| self.conclude(t)).await;
    }

    fn conclude(&self, table: &Table) {
        log::info!("[session {}] game over after {} turns", self.id, table.turns());
        if !table.eliminated().is_empty() {
            log::info!("[session {}] eliminated: {}", self.id, table.eliminated().join(", "));
        }
        match table.winner() {
            Some(seat) => log::info!("[session {}] winner: {}", self.id, seat),
            None => log::info!("[session {}] no winner", self.id),
        }
    }

    fn lineup(table: &Table) -> String {
        table
            .roster()
            .iter()
            .map(Seat::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
