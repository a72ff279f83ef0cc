//! Edge case tests for jokebox-engine
//!
//! These tests cover boundary conditions and the fetch/vote/persist scenarios
//! end to end, with the fetched texts fed in by hand.

use jokebox_engine::{Error, Joke, JokeStore, Offer, SortPolicy, Vote};

/// Run a cycle against a scripted list of texts, aborting on exhaustion.
fn run_cycle(store: &mut JokeStore, count: usize, texts: &[&str]) -> Result<usize, Error> {
    let mut cycle = store.begin_fetch(count)?;
    let mut source = texts.iter();

    while !cycle.is_complete() {
        if let Err(e) = cycle.ensure_budget() {
            store.abort(cycle)?;
            return Err(e);
        }
        match source.next() {
            Some(text) => {
                cycle.offer(store, *text);
            }
            None => {
                let collected = cycle.collected().len();
                store.abort(cycle)?;
                return Err(Error::IncompleteCycle {
                    requested: count,
                    collected,
                });
            }
        }
    }

    store.commit(cycle)
}

fn texts(store: &JokeStore) -> Vec<&str> {
    store.jokes().iter().map(|j| j.text.as_str()).collect()
}

// ============================================================================
// Fetch Scenarios
// ============================================================================

#[test]
fn fresh_start_with_duplicate() {
    let mut store = JokeStore::hydrate(None);
    assert!(store.is_empty());

    let added = run_cycle(&mut store, 3, &["A", "B", "A", "C"]).unwrap();
    assert_eq!(added, 3);

    let mut got = texts(&store);
    got.sort_unstable();
    assert_eq!(got, vec!["A", "B", "C"]);
    assert!(store.jokes().iter().all(|j| j.votes == 0));
    assert!(!store.is_loading());
}

#[test]
fn failure_mid_cycle_leaves_list_unchanged() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 2, &["X", "Y"]).unwrap();
    let before = store.jokes().to_vec();

    // Second of three requests fails
    let mut cycle = store.begin_fetch(3).unwrap();
    assert_eq!(cycle.offer(&store, "A"), Offer::Accepted);
    assert!(store.is_loading());
    store.abort(cycle).unwrap();

    assert!(!store.is_loading());
    assert_eq!(store.jokes(), before.as_slice());
    assert!(!store.has_seen("A"));
}

#[test]
fn aborted_text_can_be_fetched_again() {
    let mut store = JokeStore::new();

    let mut cycle = store.begin_fetch(2).unwrap();
    cycle.offer(&store, "A");
    store.abort(cycle).unwrap();

    run_cycle(&mut store, 1, &["A"]).unwrap();
    assert_eq!(texts(&store), vec!["A"]);
}

#[test]
fn duplicates_across_cycles() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 2, &["A", "B"]).unwrap();
    run_cycle(&mut store, 2, &["B", "A", "C", "D"]).unwrap();

    assert_eq!(store.len(), 4);
}

#[test]
fn only_duplicates_exhausts_budget() {
    let mut store = JokeStore::new().with_attempts_factor(3);
    run_cycle(&mut store, 1, &["A"]).unwrap();
    let before = store.jokes().to_vec();

    let repeats = ["A"; 50];
    let err = run_cycle(&mut store, 2, &repeats).unwrap_err();

    assert_eq!(
        err,
        Error::AttemptsExhausted {
            requested: 2,
            collected: 0,
            attempts: 6,
        }
    );
    assert_eq!(store.jokes(), before.as_slice());
    assert!(!store.is_loading());
}

#[test]
fn huge_count_does_not_overflow_budget() {
    let mut store = JokeStore::new();
    let cycle = store.begin_fetch(usize::MAX).unwrap();
    assert_eq!(cycle.max_attempts(), usize::MAX);
    store.abort(cycle).unwrap();
}

// ============================================================================
// Sorting Edge Cases
// ============================================================================

#[test]
fn sort_is_stable_for_ties() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 3, &["A", "B", "C"]).unwrap();
    run_cycle(&mut store, 2, &["D", "E"]).unwrap();

    assert_eq!(texts(&store), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn negative_votes_sink() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 2, &["A", "B"]).unwrap();
    let a = store.jokes()[0].id.clone();
    store.vote(&a, Vote::Down);

    run_cycle(&mut store, 1, &["C"]).unwrap();
    assert_eq!(texts(&store), vec!["B", "C", "A"]);
}

#[test]
fn hydrated_order_is_not_resorted_until_fetch() {
    let mut low = Joke::with_id("j1", "low");
    low.votes = -2;
    let mut high = Joke::with_id("j2", "high");
    high.votes = 7;
    let json = jokebox_engine::JokeSnapshot::new(vec![low, high])
        .to_json()
        .unwrap();

    let mut store = JokeStore::hydrate(Some(&json));
    assert_eq!(texts(&store), vec!["low", "high"]);

    run_cycle(&mut store, 1, &["new"]).unwrap();
    assert_eq!(texts(&store), vec!["high", "new", "low"]);
}

#[test]
fn insertion_order_policy() {
    let mut store = JokeStore::new().with_sort_policy(SortPolicy::InsertionOrder);
    run_cycle(&mut store, 2, &["A", "B"]).unwrap();
    let b = store.jokes()[1].id.clone();
    store.vote(&b, Vote::Up);
    store.vote(&b, Vote::Up);

    run_cycle(&mut store, 1, &["C"]).unwrap();
    assert_eq!(texts(&store), vec!["A", "B", "C"]);
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn texts_differing_in_whitespace_are_distinct() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 3, &["joke", "joke ", "Joke"]).unwrap();
    assert_eq!(store.len(), 3);
}

#[test]
fn unicode_and_empty_texts() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 4, &["", "日本語", "🎉🚀", "Hello\nWorld"]).unwrap();

    let json = store.persist().unwrap();
    let restored = JokeStore::hydrate(Some(&json));
    assert_eq!(restored.jokes(), store.jokes());
}

// ============================================================================
// Snapshot Edge Cases
// ============================================================================

#[test]
fn hydrate_garbage() {
    for raw in ["", "null", "{}", "[{}]", "[", r#"[{"id":1,"text":"A","votes":0}]"#] {
        let store = JokeStore::hydrate(Some(raw));
        assert!(store.is_empty(), "expected empty store for {:?}", raw);
    }
}

#[test]
fn hydrate_then_dedupe_against_persisted() {
    let raw = r#"[{"id":"j1","text":"A","votes":5}]"#;
    let mut store = JokeStore::hydrate(Some(raw));

    run_cycle(&mut store, 1, &["A", "B"]).unwrap();
    assert_eq!(texts(&store), vec!["A", "B"]);
    assert_eq!(store.get("j1").unwrap().votes, 5);
}

#[test]
fn vote_roundtrip_survives_persistence() {
    let mut store = JokeStore::new();
    run_cycle(&mut store, 1, &["A"]).unwrap();
    let id = store.jokes()[0].id.clone();

    store.vote(&id, Vote::Up);
    store.vote(&id, Vote::Up);
    store.vote(&id, Vote::Down);

    let restored = JokeStore::hydrate(Some(&store.persist().unwrap()));
    assert_eq!(restored.get(&id).unwrap().votes, 1);
}
