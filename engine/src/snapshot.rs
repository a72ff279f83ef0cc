//! Snapshot type for persisting and restoring the joke list.
//!
//! The persisted form is a bare JSON array of jokes in display order, with no
//! envelope and no format version.

use crate::{error::Result, Error, Joke};
use serde::{Deserialize, Serialize};

/// A point-in-time copy of the joke list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeSnapshot {
    pub jokes: Vec<Joke>,
}

impl JokeSnapshot {
    /// Create a snapshot from a list of jokes.
    pub fn new(jokes: Vec<Joke>) -> Self {
        Self { jokes }
    }

    /// Number of jokes in the snapshot.
    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    /// Check if the snapshot holds no jokes.
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON.
    ///
    /// Only the structure is checked: an array of objects with string `id`,
    /// string `text` and integer `votes`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JokeSnapshot {
        let mut a = Joke::with_id("j1", "A");
        a.votes = 3;
        let mut b = Joke::with_id("j2", "B");
        b.votes = -1;
        JokeSnapshot::new(vec![a, b])
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = JokeSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_json().unwrap(), "[]");
    }

    #[test]
    fn json_roundtrip() {
        let snapshot = sample();

        let json = snapshot.to_json().unwrap();
        let restored = JokeSnapshot::from_json(&json).unwrap();

        assert_eq!(snapshot, restored);
        assert_eq!(restored.jokes[0].id, "j1");
        assert_eq!(restored.jokes[1].id, "j2");
    }

    #[test]
    fn persisted_format_is_a_bare_array() {
        let json = sample().to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"id":"j1","text":"A","votes":3},{"id":"j2","text":"B","votes":-1}]"#
        );
    }

    #[test]
    fn reject_non_array() {
        let result = JokeSnapshot::from_json(r#"{"jokes": []}"#);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn reject_wrong_field_type() {
        let result = JokeSnapshot::from_json(r#"[{"id": "j1", "text": "A", "votes": "many"}]"#);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn reject_missing_field() {
        let result = JokeSnapshot::from_json(r#"[{"id": "j1", "text": "A"}]"#);
        assert!(matches!(result, Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn ignores_unknown_fields() {
        let snapshot =
            JokeSnapshot::from_json(r#"[{"id": "j1", "text": "A", "votes": 0, "extra": true}]"#)
                .unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
