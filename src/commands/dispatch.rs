// src/commands/dispatch.rs
//! Command parsing and routing.
//!
//! A line is split on whitespace; the first token picks a handler through
//! the closed [`CommandKind`] enumeration, so the dispatch `match` is
//! checked for exhaustiveness at compile time. Unknown names and handler
//! failures are local to the line; nothing here ends the session except
//! an explicit `exit`.

use crate::session::Session;

use super::types::{CommandResult, Outcome};
use super::{cd_cmd, date, exit_cmd, ls, rev_cmd, touch};

/// The closed set of commands the emulator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Ls,
    Cd,
    Date,
    Touch,
    Rev,
    Exit,
}

impl CommandKind {
    /// Exact, case-sensitive name lookup. No aliases, no abbreviation.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ls" => Some(Self::Ls),
            "cd" => Some(Self::Cd),
            "date" => Some(Self::Date),
            "touch" => Some(Self::Touch),
            "rev" => Some(Self::Rev),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Date => "date",
            Self::Touch => "touch",
            Self::Rev => "rev",
            Self::Exit => "exit",
        }
    }
}

/// Parse and run one input line against the session.
pub fn dispatch(session: &mut Session, line: &str) -> Outcome {
    let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();
    let Some((name, args)) = tokens.split_first() else {
        return Outcome::Continue(CommandResult::empty());
    };

    let Some(kind) = CommandKind::from_name(name) else {
        return Outcome::Continue(CommandResult::with_exit_code(
            String::new(),
            format!("{}: command not found\n", name),
            127,
        ));
    };

    match kind {
        CommandKind::Ls => Outcome::Continue(ls::execute(session, args)),
        CommandKind::Cd => Outcome::Continue(cd_cmd::execute(session, args)),
        CommandKind::Date => Outcome::Continue(date::execute(session, args)),
        CommandKind::Touch => Outcome::Continue(touch::execute(session, args)),
        CommandKind::Rev => Outcome::Continue(rev_cmd::execute(session, args)),
        CommandKind::Exit => Outcome::Exit(exit_cmd::execute(session, args)),
    }
}
