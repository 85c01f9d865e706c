use super::Table;
use tokio::sync::Mutex;
use tokio::sync::Notify;
use tokio::time::Instant;

/// Wakes the turn loop when a move lands in the table's slot.
///
/// `ring` leaves a permit when the loop is not yet parked, so a move
/// deposited between the slot check and the wait still wakes it.
/// A wake is only a hint: the slot is re-read under the table lock
/// and the loop parks again until the same deadline if it is still empty.
#[derive(Debug, Default)]
pub struct Mailbox {
    bell: Notify,
}

impl Mailbox {
    pub fn ring(&self) {
        self.bell.notify_one();
    }
    /// Park until the slot holds a move or the deadline passes.
    /// The caller takes whatever the slot holds under the lock afterwards.
    pub async fn wait(&self, table: &Mutex<Table>, deadline: Instant) {
        loop {
            if table.lock().await.pending().is_some() {
                return;
            }
            if tokio::time::timeout_at(deadline, self.bell.notified())
                .await
                .is_err()
            {
                log::debug!("[mailbox] deadline passed with an empty slot");
                return;
            }
        }
    }
}
