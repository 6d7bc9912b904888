//! Shell command parsing

use crate::error::{MongoExportError, Result};

/// Commands understood by the interactive shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Connect to a server, optionally with an explicit URI
    Connect(Option<String>),

    /// List database names
    Databases,

    /// Select a database and list its collections
    Use(String),

    /// Show the collection listing of the selected database
    Collections,

    /// Export a collection, `All`, or nothing when the selection is empty
    Export(String),

    /// Show help
    Help,

    /// Leave the shell
    Exit,
}

impl ShellCommand {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword {
            "connect" => Self::Connect((!rest.is_empty()).then(|| rest.to_string())),
            "dbs" | "databases" if rest.is_empty() => Self::Databases,
            "show" => match rest {
                "dbs" | "databases" => Self::Databases,
                "collections" => Self::Collections,
                _ => {
                    return Err(MongoExportError::Generic(
                        "Usage: show dbs | show collections".into(),
                    ));
                }
            },
            "use" => {
                if rest.is_empty() {
                    return Err(MongoExportError::Generic("Usage: use <database>".into()));
                }
                Self::Use(rest.to_string())
            }
            "collections" | "colls" => Self::Collections,
            "export" => Self::Export(rest.to_string()),
            "help" | "?" => Self::Help,
            "exit" | "quit" => Self::Exit,
            other => {
                return Err(MongoExportError::Generic(format!(
                    "Unknown command: {other}. Type 'help' for a list of commands."
                )));
            }
        };

        Ok(Some(command))
    }
}

/// Help text listing shell commands
pub const HELP: &str = "\
Commands:
  connect [uri]      Connect to MongoDB (default URI when omitted)
  dbs, show dbs      List databases
  use <database>     Select a database and list its collections
  collections        Show collections of the selected database (or show collections)
  export <name|All>  Export one collection, or every collection with All
  help               Show this help
  exit               Leave the shell";
