//! Interactive export shell
//!
//! A `reedline` loop over an [`ExportSession`]. Connecting lists databases and
//! selects the first one, mirroring how the listing is presented to the
//! operator; `use` switches database and `export` writes the selected
//! collection or `All`.

use nu_ansi_term::{Color, Style};
use reedline::{Reedline, Signal};
use tracing::debug;

use crate::error::Result;
use crate::session::{ExportSession, Severity, UserMessage};
use crate::store::Connector;

pub mod command;
pub mod prompt;

pub use command::ShellCommand;
pub use prompt::ExportPrompt;

/// Output of one shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Names listed one per line
    Listing(Vec<String>),

    /// Operator-facing message
    Message(UserMessage),

    /// Plain text
    Text(String),

    /// Leave the loop
    Exit,
}

/// Interactive shell driving an export session
pub struct ExportShell<C: Connector> {
    session: ExportSession<C>,
    color: bool,
}

impl<C: Connector> ExportShell<C> {
    /// Create a shell over a session
    pub fn new(session: ExportSession<C>) -> Self {
        Self {
            session,
            color: true,
        }
    }

    /// Enable or disable colored messages
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Session driven by this shell
    pub fn session(&self) -> &ExportSession<C> {
        &self.session
    }

    /// Run the read-eval-print loop until `exit` or Ctrl-D
    ///
    /// # Arguments
    /// * `initial_uri` - Connect to this URI before the first prompt
    pub async fn run(&mut self, initial_uri: Option<&str>) -> Result<()> {
        if let Some(uri) = initial_uri {
            let replies = self.execute(ShellCommand::Connect(Some(uri.to_string()))).await;
            self.print(&replies);
        }

        let mut editor = Reedline::create();

        loop {
            let prompt = ExportPrompt::new(
                self.session.database().map(str::to_string),
                self.session.is_connected(),
            );

            let line = match editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlD => break,
                _ => continue,
            };

            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.print(&[Reply::Message(UserMessage::error(&e))]);
                    continue;
                }
            };

            debug!("Shell command: {:?}", command);
            let replies = self.execute(command).await;
            if replies.contains(&Reply::Exit) {
                break;
            }
            self.print(&replies);
        }

        Ok(())
    }

    /// Execute one command against the session
    pub async fn execute(&mut self, command: ShellCommand) -> Vec<Reply> {
        match command {
            ShellCommand::Connect(uri) => self.connect(uri.as_deref().unwrap_or("")).await,
            ShellCommand::Databases => match self.session.list_databases().await {
                Ok(names) if names.is_empty() => {
                    vec![Reply::Message(UserMessage::no_databases())]
                }
                Ok(names) => vec![Reply::Listing(names)],
                Err(e) => vec![Reply::Message(UserMessage::error(&e))],
            },
            ShellCommand::Use(database) => match self.session.select_database(&database).await {
                Ok(listing) => vec![Reply::Listing(listing.to_vec())],
                Err(e) => vec![Reply::Message(UserMessage::error(&e))],
            },
            ShellCommand::Collections => match self.session.database() {
                Some(_) => vec![Reply::Listing(self.session.collections().to_vec())],
                None => vec![Reply::Text(
                    "No database selected. Use 'use <database>' first.".to_string(),
                )],
            },
            ShellCommand::Export(selection) => match self.session.export(&selection).await {
                Ok(outcome) => vec![Reply::Message(outcome.message())],
                Err(e) => vec![Reply::Message(UserMessage::export_failed(&e))],
            },
            ShellCommand::Help => vec![Reply::Text(command::HELP.to_string())],
            ShellCommand::Exit => vec![Reply::Exit],
        }
    }

    async fn connect(&mut self, uri: &str) -> Vec<Reply> {
        let names = match self.session.connect(uri).await {
            Ok(names) => names,
            Err(e) => return vec![Reply::Message(UserMessage::connection_failed(&e))],
        };

        let Some(first) = names.first().cloned() else {
            return vec![Reply::Message(UserMessage::no_databases())];
        };

        let mut replies = vec![Reply::Listing(names)];
        match self.session.select_database(&first).await {
            Ok(listing) => {
                replies.push(Reply::Text(format!("Using database '{first}'")));
                replies.push(Reply::Listing(listing.to_vec()));
            }
            Err(e) => replies.push(Reply::Message(UserMessage::error(&e))),
        }
        replies
    }

    fn print(&self, replies: &[Reply]) {
        for reply in replies {
            match reply {
                Reply::Listing(names) => {
                    for name in names {
                        println!("  {name}");
                    }
                }
                Reply::Message(message) => self.print_message(message),
                Reply::Text(text) => println!("{text}"),
                Reply::Exit => {}
            }
        }
    }

    fn print_message(&self, message: &UserMessage) {
        let style = match message.severity {
            Severity::Info => Color::Green.bold(),
            Severity::Warning => Color::Yellow.bold(),
            Severity::Error => Color::Red.bold(),
        };
        let style = if self.color { style } else { Style::new() };
        let line = format!("{} {}", style.paint(format!("{}:", message.title())), message.text);

        match message.severity {
            Severity::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}
