//! Commands typed at the prompt.

use jokebox_engine::{JokeStore, Vote};

/// A joke reference: a 1-based position in the displayed list, or a raw id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Position(usize),
    Id(String),
}

impl Target {
    fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(n) => Target::Position(n),
            Err(_) => Target::Id(raw.to_string()),
        }
    }

    /// Resolve to a joke id in the current list.
    ///
    /// Positions outside the list resolve to `None`; ids are passed through
    /// unchecked, so voting on an unknown id stays a silent no-op.
    pub fn resolve<'a>(&'a self, store: &'a JokeStore) -> Option<&'a str> {
        match self {
            Target::Position(n) => n
                .checked_sub(1)
                .and_then(|i| store.jokes().get(i))
                .map(|j| j.id.as_str()),
            Target::Id(id) => Some(id.as_str()),
        }
    }
}

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch more jokes, optionally overriding the default count
    Fetch(Option<usize>),
    /// Vote on a joke
    Vote { target: Target, vote: Vote },
    /// Show the list again
    List,
    Help,
    Quit,
}

/// Errors from parsing a prompt line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs a joke number or id")]
    MissingTarget(&'static str),

    #[error("'{0}' is not a positive number of jokes")]
    InvalidCount(String),

    #[error("too many arguments for '{0}'")]
    TrailingInput(&'static str),
}

impl Command {
    /// Parse one line of input. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        let extra = words.next().is_some();

        let command = match head.to_ascii_lowercase().as_str() {
            "fetch" | "f" | "more" => {
                let count = arg
                    .map(|raw| match raw.parse::<usize>() {
                        Ok(n) if n > 0 => Ok(n),
                        _ => Err(ParseError::InvalidCount(raw.to_string())),
                    })
                    .transpose()?;
                if extra {
                    return Err(ParseError::TrailingInput("fetch"));
                }
                Command::Fetch(count)
            }
            "up" | "+" => Self::vote("up", arg, extra, Vote::Up)?,
            "down" | "-" => Self::vote("down", arg, extra, Vote::Down)?,
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    fn vote(
        name: &'static str,
        arg: Option<&str>,
        extra: bool,
        vote: Vote,
    ) -> Result<Self, ParseError> {
        let target = arg.ok_or(ParseError::MissingTarget(name))?;
        if extra {
            return Err(ParseError::TrailingInput(name));
        }
        Ok(Command::Vote {
            target: Target::parse(target),
            vote,
        })
    }
}
