use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use std::collections::VecDeque;

/// Greedy grouping policy.
/// A group forms as soon as `min` players wait and takes at most `max`
/// of them, earliest registrants first. It never holds out for a bigger table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchmaker {
    min: usize,
    max: usize,
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new(MIN_PLAYERS, MAX_PLAYERS)
    }
}

impl Matchmaker {
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min >= 1 && min <= max, "matchmaker bounds {}..={}", min, max);
        Self { min, max }
    }
    #[cfg(test)]
    pub fn min(&self) -> usize {
        self.min
    }
    #[cfg(test)]
    pub fn max(&self) -> usize {
        self.max
    }
    /// Remove the next group from the front of the queue, if one can form.
    pub fn draw<T>(&self, queue: &mut VecDeque<T>) -> Option<Vec<T>> {
        let n = queue.len().min(self.max);
        (queue.len() >= self.min).then(|| queue.drain(..n).collect())
    }
}
