//! # Jokebox Engine
//!
//! The state core of Jokebox: a list of jokes that can be grown by fetch cycles
//! and voted on, with a JSON snapshot format for persistence.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of files, network, or terminals
//! - **Single owner**: All state lives in one [`JokeStore`], mutated through `&mut self`
//! - **Testable**: Pure logic, fetched texts are fed in by the caller
//!
//! ## Core Concepts
//!
//! ### Jokes
//!
//! A [`Joke`] is an id, the joke text, and a signed vote count starting at zero.
//! Jokes are only created by fetch cycles and only their votes ever change.
//!
//! ### Fetch Cycles
//!
//! [`JokeStore::begin_fetch`] flips the store into the loading state and hands
//! out a [`FetchCycle`]. The caller offers fetched texts one at a time; texts the
//! store has already seen, or that were offered earlier in the same cycle, are
//! discarded. The cycle ends in exactly one of:
//! - [`JokeStore::commit`] - append the collected jokes and re-sort
//! - [`JokeStore::abort`] - drop everything collected in this cycle
//!
//! Each cycle carries an attempt bound so a source that only repeats itself
//! cannot keep it running forever.
//!
//! ## Quick Start
//!
//! ```rust
//! use jokebox_engine::{JokeStore, Offer, Vote};
//!
//! let mut store = JokeStore::new();
//!
//! let mut cycle = store.begin_fetch(2).unwrap();
//! let offers: Vec<Offer> = ["A", "A", "B"]
//!     .into_iter()
//!     .map(|text| cycle.offer(&store, text))
//!     .collect();
//! assert_eq!(offers, vec![Offer::Accepted, Offer::Duplicate, Offer::Accepted]);
//! assert!(cycle.is_complete());
//! let added = store.commit(cycle).unwrap();
//! assert_eq!(added, 2);
//!
//! let id = store.jokes()[0].id.clone();
//! assert!(store.vote(&id, Vote::Up));
//! assert_eq!(store.get(&id).unwrap().votes, 1);
//!
//! // Persist and restore
//! let json = store.persist().unwrap();
//! let restored = JokeStore::hydrate(Some(&json));
//! assert_eq!(restored.jokes(), store.jokes());
//! ```

pub mod error;
pub mod fetch;
pub mod joke;
pub mod snapshot;
pub mod store;

// Re-export main types at crate root
pub use error::Error;
pub use fetch::{FetchCycle, Offer, DEFAULT_ATTEMPTS_FACTOR};
pub use joke::{Joke, Vote};
pub use snapshot::JokeSnapshot;
pub use store::{JokeStore, SortPolicy};

/// Type aliases for clarity
pub type JokeId = String;
pub type VoteCount = i64;
