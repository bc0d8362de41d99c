//! The session's input affordances as a small command language.
//!
//! One line of input maps to one [`Command`]. The verbs cover the two kinds
//! of item edits (toggle the checkbox, replace the title), item creation,
//! and a few session verbs. Parsing rejects unknown verbs, missing
//! arguments and non-numeric ids with a usage message; it never touches the
//! store or the network.

use onelist_core::ItemId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { title: String },
    Toggle { id: ItemId },
    Edit { id: ItemId, title: String },
    List,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try help")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("id must be a number, got {0:?}")]
    BadId(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb {
            "add" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("add <title>"));
                }
                Ok(Command::Add {
                    title: rest.to_string(),
                })
            }
            "toggle" => Ok(Command::Toggle {
                id: parse_id(rest, "toggle <id>")?,
            }),
            "edit" => {
                let (id, title) = match rest.split_once(char::is_whitespace) {
                    Some((id, title)) if !title.trim().is_empty() => (id, title.trim()),
                    _ => return Err(CommandError::Usage("edit <id> <title>")),
                };
                Ok(Command::Edit {
                    id: parse_id(id, "edit <id> <title>")?,
                    title: title.to_string(),
                })
            }
            "list" => Ok(Command::List),
            "refresh" => Ok(Command::Refresh),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(raw: &str, usage: &'static str) -> Result<ItemId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    raw.parse().map_err(|_| CommandError::BadId(raw.to_string()))
}
