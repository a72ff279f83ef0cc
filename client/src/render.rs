//! Plain-text rendering of the joke list.

use jokebox_engine::{JokeStore, VoteCount};
use std::fmt::Write;

/// Reaction shown next to a joke for its vote count.
pub fn reaction(votes: VoteCount) -> &'static str {
    match votes {
        v if v >= 15 => "🤣",
        v if v >= 12 => "😆",
        v if v >= 9 => "😃",
        v if v >= 6 => "🙂",
        v if v >= 3 => "😐",
        v if v >= 0 => "😕",
        _ => "😠",
    }
}

/// Banner shown while a fetch cycle runs.
pub fn loading(count: usize) -> String {
    format!("Loading {count} jokes...")
}

/// The joke list, numbered from 1 in display order.
pub fn jokes(store: &JokeStore) -> String {
    let mut out = String::from("Dad Jokes\n");
    if store.is_empty() {
        out.push_str("  (no jokes yet, type 'fetch')\n");
        return out;
    }

    let width = store.len().to_string().len();
    for (i, joke) in store.jokes().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>width$}. [{:+}] {} {}",
            i + 1,
            joke.votes,
            reaction(joke.votes),
            joke.text,
        );
    }
    out
}

/// Text of a blocking error notification.
pub fn alert(message: &str) -> String {
    let rule = "-".repeat(message.chars().count().max(20) + 4);
    format!("{rule}\n  {message}\n{rule}")
}

pub fn help() -> &'static str {
    "\
Commands:
  fetch [n]      fetch n more jokes (f)
  up <n|id>      upvote joke n (+)
  down <n|id>    downvote joke n (-)
  list           show the jokes again (ls)
  help           this text (?)
  quit           leave (q)"
}
