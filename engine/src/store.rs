//! Store - the in-memory joke list.
//!
//! The Store holds every joke in display order, the set of texts it has seen,
//! and whether a fetch cycle is currently running.

use crate::{
    error::Result, fetch::DEFAULT_ATTEMPTS_FACTOR, Error, FetchCycle, Joke, JokeSnapshot, Vote,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the list is ordered after a fetch cycle commits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Highest votes first. Ties keep their previous relative order.
    #[default]
    VotesDescending,
    /// Keep the order jokes were added in.
    InsertionOrder,
}

impl SortPolicy {
    fn apply(self, jokes: &mut [Joke]) {
        match self {
            // sort_by is stable
            SortPolicy::VotesDescending => jokes.sort_by(|a, b| b.votes.cmp(&a.votes)),
            SortPolicy::InsertionOrder => {}
        }
    }
}

/// The joke list and its fetch state.
#[derive(Debug, Clone)]
pub struct JokeStore {
    /// Jokes in display order
    jokes: Vec<Joke>,
    /// Texts of every stored joke, for duplicate checks
    seen: HashSet<String>,
    /// Ordering applied on commit
    sort_policy: SortPolicy,
    /// Attempts allowed per requested joke
    attempts_factor: usize,
    /// Id of the running cycle, if any
    active_cycle: Option<u64>,
    /// Id handed to the next cycle
    next_cycle: u64,
}

impl Default for JokeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JokeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::from_jokes(Vec::new())
    }

    /// Create a store holding the given jokes in the given order.
    pub fn from_jokes(jokes: Vec<Joke>) -> Self {
        let seen = jokes.iter().map(|j| j.text.clone()).collect();
        Self {
            jokes,
            seen,
            sort_policy: SortPolicy::default(),
            attempts_factor: DEFAULT_ATTEMPTS_FACTOR,
            active_cycle: None,
            next_cycle: 0,
        }
    }

    /// Restore a store from persisted JSON.
    ///
    /// Missing or malformed data yields an empty store. Use
    /// [`JokeStore::try_hydrate`] to find out why data was rejected.
    pub fn hydrate(raw: Option<&str>) -> Self {
        raw.and_then(|json| Self::try_hydrate(json).ok()).unwrap_or_default()
    }

    /// Restore a store from persisted JSON, reporting malformed data.
    pub fn try_hydrate(raw: &str) -> Result<Self> {
        let snapshot = JokeSnapshot::from_json(raw)?;
        Ok(Self::from_jokes(snapshot.jokes))
    }

    /// Set the ordering applied when a cycle commits.
    pub fn with_sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    /// Set the attempt bound, as a multiple of the requested count.
    /// Values below 1 are raised to 1.
    pub fn with_attempts_factor(mut self, factor: usize) -> Self {
        self.attempts_factor = factor.max(1);
        self
    }

    /// Get the sort policy.
    pub fn sort_policy(&self) -> SortPolicy {
        self.sort_policy
    }

    /// All jokes in display order.
    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    /// Get a joke by ID.
    pub fn get(&self, id: &str) -> Option<&Joke> {
        self.jokes.iter().find(|j| j.id == id)
    }

    /// Number of stored jokes.
    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    /// Check if the store holds no jokes.
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Whether a fetch cycle is running.
    pub fn is_loading(&self) -> bool {
        self.active_cycle.is_some()
    }

    /// Whether a joke with this exact text is stored.
    pub fn has_seen(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    /// Start a fetch cycle for `count` new jokes.
    ///
    /// Fails if `count` is zero or another cycle is still running.
    pub fn begin_fetch(&mut self, count: usize) -> Result<FetchCycle> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        if self.active_cycle.is_some() {
            return Err(Error::FetchInProgress);
        }

        let id = self.next_cycle;
        self.next_cycle = self.next_cycle.wrapping_add(1);
        self.active_cycle = Some(id);

        let max_attempts = count.saturating_mul(self.attempts_factor);
        Ok(FetchCycle::new(id, count, max_attempts))
    }

    /// Finish a cycle: append its jokes and apply the sort policy.
    ///
    /// Returns the number of jokes added. Collected texts this store already
    /// holds are dropped. An incomplete cycle is discarded and reported as an
    /// error; either way the store leaves the loading state.
    pub fn commit(&mut self, cycle: FetchCycle) -> Result<usize> {
        self.release(&cycle)?;

        if !cycle.is_complete() {
            return Err(Error::IncompleteCycle {
                requested: cycle.requested(),
                collected: cycle.collected().len(),
            });
        }

        // Offers may have been checked against a different store
        let mut added = 0;
        for joke in cycle.into_jokes() {
            if self.seen.insert(joke.text.clone()) {
                self.jokes.push(joke);
                added += 1;
            }
        }
        self.sort_policy.apply(&mut self.jokes);

        Ok(added)
    }

    /// Drop a cycle without keeping anything it collected.
    pub fn abort(&mut self, cycle: FetchCycle) -> Result<()> {
        self.release(&cycle)
    }

    fn release(&mut self, cycle: &FetchCycle) -> Result<()> {
        if self.active_cycle != Some(cycle.id) {
            return Err(Error::ForeignCycle);
        }
        self.active_cycle = None;
        Ok(())
    }

    /// Apply a vote to the joke with the given ID.
    ///
    /// Returns `false` and changes nothing if no such joke exists. The list is
    /// not re-sorted.
    pub fn vote(&mut self, id: &str, vote: Vote) -> bool {
        match self.jokes.iter_mut().find(|j| j.id == id) {
            Some(joke) => {
                joke.apply_vote(vote);
                true
            }
            None => false,
        }
    }

    /// Export the current joke list as a snapshot.
    pub fn export_state(&self) -> JokeSnapshot {
        JokeSnapshot::new(self.jokes.clone())
    }

    /// Serialize the joke list for persistence.
    pub fn persist(&self) -> Result<String> {
        self.export_state().to_json()
    }
}
