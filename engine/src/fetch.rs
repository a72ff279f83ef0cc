//! Fetch cycles.
//!
//! A [`FetchCycle`] collects freshly fetched jokes until it holds the requested
//! number of unique texts. It never touches the store itself: the store hands one
//! out from [`JokeStore::begin_fetch`] and takes it back in
//! [`JokeStore::commit`] or [`JokeStore::abort`].

use crate::{error::Result, Error, Joke, JokeStore};
use std::collections::HashSet;

/// Default bound on fetch attempts, as a multiple of the requested count.
pub const DEFAULT_ATTEMPTS_FACTOR: usize = 10;

const PREALLOC_LIMIT: usize = 64;

/// Outcome of offering a fetched text to a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// New text, kept as a joke in this cycle
    Accepted,
    /// Already stored or already offered in this cycle
    Duplicate,
    /// The cycle was already complete, text ignored
    Surplus,
}

/// An in-flight fetch cycle.
///
/// Not `Clone`: each cycle is handed back to its store exactly once.
#[derive(Debug)]
pub struct FetchCycle {
    pub(crate) id: u64,
    requested: usize,
    max_attempts: usize,
    attempts: usize,
    duplicates: usize,
    collected: Vec<Joke>,
    texts: HashSet<String>,
}

impl FetchCycle {
    pub(crate) fn new(id: u64, requested: usize, max_attempts: usize) -> Self {
        Self {
            id,
            requested,
            max_attempts,
            attempts: 0,
            duplicates: 0,
            collected: Vec::with_capacity(requested.min(PREALLOC_LIMIT)),
            texts: HashSet::with_capacity(requested.min(PREALLOC_LIMIT)),
        }
    }

    /// Number of unique jokes this cycle is after.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// How many more unique jokes are needed.
    pub fn remaining(&self) -> usize {
        self.requested.saturating_sub(self.collected.len())
    }

    /// Whether the requested number of unique jokes has been collected.
    pub fn is_complete(&self) -> bool {
        self.collected.len() >= self.requested
    }

    /// Texts offered so far, duplicates included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Upper bound on attempts for this cycle.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of discarded duplicates.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Jokes collected so far, in fetch order.
    pub fn collected(&self) -> &[Joke] {
        &self.collected
    }

    /// Check that another fetch attempt is allowed.
    ///
    /// Call before issuing each request; once the bound is reached the caller
    /// should abort the cycle with the returned error.
    pub fn ensure_budget(&self) -> Result<()> {
        if self.attempts >= self.max_attempts {
            return Err(Error::AttemptsExhausted {
                requested: self.requested,
                collected: self.collected.len(),
                attempts: self.attempts,
            });
        }
        Ok(())
    }

    /// Offer a fetched text.
    ///
    /// The text is checked against everything the store has seen and everything
    /// accepted earlier in this cycle. Pass the store that began the cycle;
    /// [`JokeStore::commit`] drops any text that store already holds.
    pub fn offer(&mut self, store: &JokeStore, text: impl Into<String>) -> Offer {
        if self.is_complete() {
            return Offer::Surplus;
        }
        self.attempts += 1;

        let text = text.into();
        if store.has_seen(&text) || self.texts.contains(&text) {
            self.duplicates += 1;
            return Offer::Duplicate;
        }

        self.texts.insert(text.clone());
        self.collected.push(Joke::new(text));
        Offer::Accepted
    }

    pub(crate) fn into_jokes(self) -> Vec<Joke> {
        self.collected
    }
}
