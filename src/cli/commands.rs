//! One-shot subcommands
//!
//! Each command opens a session, runs one workflow step and returns either
//! the lines to print or the message explaining why it stopped.

use std::process::ExitCode;

use crate::export::ALL_COLLECTIONS;
use crate::session::{ExportOutcome, ExportSession, Severity, UserMessage};
use crate::store::Connector;

/// Outcome of a one-shot command
pub type CommandOutput = std::result::Result<Vec<String>, UserMessage>;

/// Connect and list database names
pub async fn databases<C: Connector>(session: &mut ExportSession<C>, uri: &str) -> CommandOutput {
    let names = session
        .connect(uri)
        .await
        .map_err(|e| UserMessage::connection_failed(&e))?;

    if names.is_empty() {
        return Err(UserMessage::no_databases());
    }
    Ok(names)
}

/// Connect and list `All` plus the collections of a database
pub async fn collections<C: Connector>(
    session: &mut ExportSession<C>,
    uri: &str,
    database: &str,
) -> CommandOutput {
    session
        .connect(uri)
        .await
        .map_err(|e| UserMessage::connection_failed(&e))?;

    session
        .list_collections(database)
        .await
        .map_err(|e| UserMessage::error(&e))
}

/// Connect and export a collection or every collection of a database
pub async fn export<C: Connector>(
    session: &mut ExportSession<C>,
    uri: &str,
    database: &str,
    selection: Option<&str>,
    all: bool,
) -> CommandOutput {
    session
        .connect(uri)
        .await
        .map_err(|e| UserMessage::connection_failed(&e))?;

    session
        .select_database(database)
        .await
        .map_err(|e| UserMessage::error(&e))?;

    let selection = if all {
        ALL_COLLECTIONS
    } else {
        selection.unwrap_or_default()
    };

    match session.export(selection).await {
        Ok(ExportOutcome::Exported(report)) => {
            Ok(vec![UserMessage::exported(&report).text])
        }
        Ok(outcome @ ExportOutcome::NothingSelected) => Err(outcome.message()),
        Err(e) => Err(UserMessage::export_failed(&e)),
    }
}

/// Print a command's output and pick the exit code
pub fn finish(output: CommandOutput) -> ExitCode {
    match output {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            match message.severity {
                Severity::Error => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            }
        }
    }
}
