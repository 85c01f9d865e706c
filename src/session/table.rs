use super::*;
use crate::PlayerId;
use crate::gazetteer::Gazetteer;
use std::collections::HashSet;

/// Reasons a move is refused before it reaches the turn loop.
/// Refusals leave the table untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    NotYourTurn,
    Finished,
}

/// Complete state of one game: roster, chain, turn pointer and mailbox slot.
/// Everything here sits behind the session's single lock.
///
/// Roster order is turn order. The pointer always indexes the roster while
/// it is non-empty; every removal re-derives it.
#[derive(Debug, Clone)]
pub struct Table {
    roster: Vec<Seat>,
    used: HashSet<String>,
    source: Option<String>,
    pointer: usize,
    pending: Option<String>,
    eliminated: Vec<String>,
    over: bool,
    turns: u64,
}

impl Table {
    pub fn new(roster: Vec<Seat>) -> Self {
        let mut table = Self {
            roster,
            used: HashSet::new(),
            source: None,
            pointer: 0,
            pending: None,
            eliminated: Vec::new(),
            over: false,
            turns: 0,
        };
        table.settle();
        table
    }

    pub fn roster(&self) -> &[Seat] {
        &self.roster
    }
    pub fn pointer(&self) -> usize {
        self.pointer
    }
    /// Last accepted word, None before the opening move.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
    /// Names in elimination order.
    pub fn eliminated(&self) -> &[String] {
        &self.eliminated
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
    /// Number of completed turns.
    pub fn turns(&self) -> u64 {
        self.turns
    }
    pub fn is_used(&self, word: &str) -> bool {
        self.used.contains(&Gazetteer::normalize(word))
    }
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
    /// Whose move is awaited. None once the game is over.
    pub fn active(&self) -> Option<&Seat> {
        match self.over {
            true => None,
            false => self.roster.get(self.pointer),
        }
    }
    /// Sole survivor of a finished game.
    pub fn winner(&self) -> Option<&Seat> {
        match self.over {
            true => self.roster.first(),
            false => None,
        }
    }
}

impl Table {
    /// Put a move in the slot for the active player.
    /// A later deposit in the same turn replaces the earlier one.
    pub fn deposit(&mut self, player: PlayerId, word: &str) -> Result<String, Refusal> {
        match self.active() {
            None => Err(Refusal::Finished),
            Some(seat) if seat.id() != player => Err(Refusal::NotYourTurn),
            Some(_) => {
                let word = Gazetteer::normalize(word);
                self.pending = Some(word.clone());
                Ok(word)
            }
        }
    }

    /// Close the current turn: take whatever sits in the slot, then accept
    /// or eliminate. The slot is empty again for the next active player.
    /// None if the game was already over.
    pub fn resolve(&mut self, gazetteer: &Gazetteer) -> Option<Verdict> {
        let seat = self.active()?.clone();
        let verdict = match self.pending.take() {
            None => Err(Violation::Timeout),
            Some(word) => self.judge(&word, gazetteer).map(|()| word),
        };
        let verdict = match verdict {
            Ok(word) => {
                self.accept(word.clone());
                Verdict::Accepted { seat, word }
            }
            Err(violation) => {
                self.eliminate();
                Verdict::Eliminated { seat, violation }
            }
        };
        self.turns += 1;
        self.settle();
        Some(verdict)
    }

    /// Checks in fixed order: known word, unused, chains from the source.
    pub fn judge(&self, word: &str, gazetteer: &Gazetteer) -> Result<(), Violation> {
        if !gazetteer.is_valid(word) {
            return Err(Violation::Unknown(word.to_string()));
        }
        if self.used.contains(word) {
            return Err(Violation::Repeated(word.to_string()));
        }
        match self.source().and_then(Gazetteer::chaining_letter) {
            Some(expected) if !word.starts_with(expected) => Err(Violation::Mismatch {
                word: word.to_string(),
                expected,
            }),
            _ => Ok(()),
        }
    }
}

impl Table {
    fn accept(&mut self, word: String) {
        self.used.insert(word.clone());
        self.source = Some(word);
        self.pointer = (self.pointer + 1) % self.roster.len();
    }

    fn eliminate(&mut self) {
        let seat = self.roster.remove(self.pointer);
        self.eliminated.push(seat.name().to_string());
        self.retain_pointer();
    }

    /// Removing the active seat slides its successor into the same index,
    /// so an unchanged pointer already names the next player.
    /// Only a pointer past the end wraps back to the first seat.
    fn retain_pointer(&mut self) {
        if self.pointer >= self.roster.len() {
            self.pointer = 0;
        }
    }

    fn settle(&mut self) {
        if self.roster.len() <= 1 {
            self.over = true;
        }
    }
}
