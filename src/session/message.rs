//! User-facing messages
//!
//! Every outcome the operator sees goes through [`UserMessage`], so any
//! front-end reproduces the same wording.

use std::fmt;

use crate::error::MongoExportError;
use crate::export::{ExportKind, ExportReport};

/// Message severity, mirrored by the front-end's styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub severity: Severity,
    pub text: String,
}

impl UserMessage {
    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Connecting or listing databases failed
    pub fn connection_failed(err: &MongoExportError) -> Self {
        Self::new(
            Severity::Error,
            format!("Failed to connect to MongoDB.\n{}", cause_of(err)),
        )
    }

    /// The server reported no databases
    pub fn no_databases() -> Self {
        Self::new(Severity::Warning, "No databases found.")
    }

    /// Export was requested without a collection
    pub fn no_collection_selected() -> Self {
        Self::new(Severity::Warning, "No collection selected!")
    }

    /// Reading or writing an export failed
    pub fn export_failed(err: &MongoExportError) -> Self {
        Self::new(Severity::Error, format!("Export failed.\n{err}"))
    }

    /// Any other failed operation
    pub fn error(err: &MongoExportError) -> Self {
        Self::new(Severity::Error, err.to_string())
    }

    /// Export finished; names the file that was written
    pub fn exported(report: &ExportReport) -> Self {
        let text = match &report.kind {
            ExportKind::Collection(name) => format!(
                "Collection '{}' exported successfully to {}.",
                name,
                report.path.display()
            ),
            ExportKind::AllCollections { .. } => format!(
                "All collections exported to {} successfully.",
                report.path.display()
            ),
        };
        Self::new(Severity::Info, text)
    }

    /// Window-style title for the severity
    pub fn title(&self) -> &'static str {
        match self.severity {
            Severity::Info => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.text)
    }
}

/// Underlying cause of a connection failure without the wrapper prefixes
fn cause_of(err: &MongoExportError) -> String {
    use crate::error::ConnectionError;

    match err {
        MongoExportError::Connection(ConnectionError::ConnectionFailed(cause)) => cause.clone(),
        MongoExportError::Connection(ConnectionError::InvalidUri(cause)) => {
            format!("Invalid connection URI: {cause}")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectionError;
    use std::path::PathBuf;

    #[test]
    fn test_connection_failed_includes_cause() {
        let err: MongoExportError =
            ConnectionError::ConnectionFailed("Server selection timeout".into()).into();
        let msg = UserMessage::connection_failed(&err);
        assert_eq!(msg.severity, Severity::Error);
        assert_eq!(msg.text, "Failed to connect to MongoDB.\nServer selection timeout");
    }

    #[test]
    fn test_warnings() {
        assert_eq!(UserMessage::no_databases().text, "No databases found.");
        assert_eq!(UserMessage::no_collection_selected().text, "No collection selected!");
        assert_eq!(UserMessage::no_collection_selected().title(), "Warning");
    }

    #[test]
    fn test_exported_names_file() {
        let report = ExportReport {
            kind: ExportKind::AllCollections {
                database: "shop".into(),
            },
            path: PathBuf::from("shop_all_collections.json"),
            collections: vec![],
            file_size_bytes: 2,
            elapsed_ms: 0,
        };
        assert_eq!(
            UserMessage::exported(&report).text,
            "All collections exported to shop_all_collections.json successfully."
        );

        let report = ExportReport {
            kind: ExportKind::Collection("orders".into()),
            path: PathBuf::from("orders.json"),
            collections: vec![("orders".into(), 2)],
            file_size_bytes: 40,
            elapsed_ms: 1,
        };
        let msg = UserMessage::exported(&report);
        assert_eq!(msg.severity, Severity::Info);
        assert_eq!(
            msg.to_string(),
            "Success: Collection 'orders' exported successfully to orders.json."
        );
    }
}
