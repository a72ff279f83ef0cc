//! Joke controller - the single owner of the joke list.
//!
//! Ties the engine's [`JokeStore`] to a [`JokeSource`] and a
//! [`KeyValueStorage`]. Every mutation goes through `&mut self`, and storage is
//! written after each one.

use crate::config::Config;
use crate::error::Result;
use crate::source::JokeSource;
use crate::storage::{KeyValueStorage, JOKES_KEY};
use jokebox_engine::{JokeStore, Offer, Vote};

/// Drives fetch cycles, votes and persistence for one joke list.
#[derive(Debug)]
pub struct JokeController<S, K> {
    store: JokeStore,
    source: S,
    storage: K,
    default_count: usize,
}

impl<S, K> JokeController<S, K>
where
    S: JokeSource,
    K: KeyValueStorage,
{
    /// Build a controller, restoring the joke list from storage.
    ///
    /// Missing, unreadable or malformed data starts an empty list.
    pub fn hydrate(source: S, storage: K, config: &Config) -> Self {
        let raw = storage.get(JOKES_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read persisted jokes");
            None
        });

        let store = match raw.as_deref() {
            None => JokeStore::new(),
            Some(json) => JokeStore::try_hydrate(json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding malformed persisted jokes");
                JokeStore::new()
            }),
        }
        .with_sort_policy(config.sort_policy)
        .with_attempts_factor(config.max_attempts_factor);

        tracing::info!(jokes = store.len(), "hydrated joke list");

        Self {
            store,
            source,
            storage,
            default_count: config.fetch_count,
        }
    }

    /// Read access to the joke list.
    pub fn store(&self) -> &JokeStore {
        &self.store
    }

    /// Read access to the joke source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read access to the storage backend.
    pub fn storage(&self) -> &K {
        &self.storage
    }

    /// Jokes requested by a fetch without an explicit count.
    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// Fetch `count` new, unique jokes one request at a time.
    ///
    /// A failed request or an exhausted attempt budget aborts the whole cycle:
    /// nothing fetched in it is kept. Returns the number of jokes added.
    pub async fn fetch_more(&mut self, count: usize) -> Result<usize> {
        let mut cycle = self.store.begin_fetch(count)?;
        tracing::info!(count, max_attempts = cycle.max_attempts(), "fetching jokes");

        while !cycle.is_complete() {
            if let Err(e) = cycle.ensure_budget() {
                tracing::warn!(error = %e, "fetch cycle gave up");
                self.store.abort(cycle)?;
                return Err(e.into());
            }

            let text = match self.source.fetch_joke().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        collected = cycle.collected().len(),
                        "fetch cycle aborted"
                    );
                    self.store.abort(cycle)?;
                    return Err(e.into());
                }
            };

            if cycle.offer(&self.store, text) == Offer::Duplicate {
                tracing::debug!(duplicates = cycle.duplicates(), "found a duplicate joke");
            }
        }

        let added = self.store.commit(cycle)?;
        tracing::info!(added, total = self.store.len(), "fetched jokes");
        self.persist()?;

        Ok(added)
    }

    /// Fetch the default number of jokes if the list is empty.
    ///
    /// Returns the number of jokes added, zero if the list already had jokes.
    pub async fn fetch_if_empty(&mut self) -> Result<usize> {
        if !self.store.is_empty() {
            return Ok(0);
        }
        self.fetch_more(self.default_count).await
    }

    /// Vote on a joke. Unknown ids are ignored.
    ///
    /// Returns whether a joke was changed.
    pub fn vote(&mut self, id: &str, vote: Vote) -> Result<bool> {
        if !self.store.vote(id, vote) {
            tracing::debug!(id, "vote for unknown joke ignored");
            return Ok(false);
        }
        tracing::debug!(id, ?vote, "vote applied");
        self.persist()?;
        Ok(true)
    }

    /// Write the joke list to storage.
    pub fn persist(&mut self) -> Result<()> {
        let json = self.store.persist()?;
        self.storage.set(JOKES_KEY, &json).map_err(|e| {
            tracing::error!(error = %e, "failed to persist jokes");
            e
        })?;
        Ok(())
    }
}
