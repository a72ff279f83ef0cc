//! Joke records and votes.

use crate::{JokeId, VoteCount};
use serde::{Deserialize, Serialize};

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// The change this vote applies to a joke's count.
    pub fn delta(self) -> VoteCount {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

/// A joke in the store.
///
/// This is also the persisted shape: `{"id": ..., "text": ..., "votes": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Unique identifier, generated when the joke is first fetched
    pub id: JokeId,
    /// The joke body
    pub text: String,
    /// Net votes, may go negative
    pub votes: VoteCount,
}

impl Joke {
    /// Create a joke with a fresh random id and no votes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), text)
    }

    /// Create a joke with a known id and no votes.
    pub fn with_id(id: impl Into<JokeId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            votes: 0,
        }
    }

    /// Apply a vote. The count saturates instead of overflowing.
    pub fn apply_vote(&mut self, vote: Vote) {
        self.votes = self.votes.saturating_add(vote.delta());
    }
}
