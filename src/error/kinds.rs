use std::{fmt, io};

use crate::error::mongo::describe_mongodb_error;

/// Crate-wide `Result` type using [`MongoExportError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, MongoExportError>;

/// Top-level error type for export operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum MongoExportError {
    /// Connection-related errors.
    Connection(ConnectionError),

    /// Export workflow errors.
    Export(ExportError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// MongoDB driver errors.
    MongoDb(mongodb::error::Error),

    /// JSON serialization errors.
    Serialization(serde_json::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Connection-specific errors.
#[derive(Debug)]
pub enum ConnectionError {
    /// Failed to establish a connection.
    ConnectionFailed(String),

    /// Invalid connection URI.
    InvalidUri(String),

    /// Not currently connected to MongoDB.
    NotConnected,
}

/// Export-specific errors.
#[derive(Debug)]
pub enum ExportError {
    /// No database has been selected in the session.
    NoDatabaseSelected,

    /// Reading documents from a collection failed.
    ReadFailed { collection: String, reason: String },

    /// Writing the export artifact failed.
    WriteFailed { path: String, reason: String },

    /// Output directory is missing or not a directory.
    InvalidOutputDir(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for MongoExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MongoExportError::Connection(e) => write!(f, "Connection error: {e}"),
            MongoExportError::Export(e) => write!(f, "Export error: {e}"),
            MongoExportError::Config(e) => write!(f, "Configuration error: {e}"),
            MongoExportError::Io(e) => write!(f, "I/O error: {e}"),
            MongoExportError::MongoDb(e) => write!(f, "{}", describe_mongodb_error(e)),
            MongoExportError::Serialization(e) => write!(f, "Serialization error: {e}"),
            MongoExportError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::ConnectionFailed(msg) => write!(f, "Failed to connect: {msg}"),
            ConnectionError::InvalidUri(msg) => write!(f, "Invalid connection URI: {msg}"),
            ConnectionError::NotConnected => write!(f, "Not connected to MongoDB"),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoDatabaseSelected => write!(f, "No database selected"),
            ExportError::ReadFailed { collection, reason } => {
                write!(f, "Failed to read collection '{collection}': {reason}")
            }
            ExportError::WriteFailed { path, reason } => {
                write!(f, "Failed to write {path}: {reason}")
            }
            ExportError::InvalidOutputDir(dir) => {
                write!(f, "Output directory does not exist: {dir}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for MongoExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MongoExportError::Io(e) => Some(e),
            MongoExportError::MongoDb(e) => Some(e),
            MongoExportError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConnectionError {}
impl std::error::Error for ExportError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to MongoExportError ========================= */

impl From<io::Error> for MongoExportError {
    fn from(err: io::Error) -> Self {
        MongoExportError::Io(err)
    }
}

impl From<mongodb::error::Error> for MongoExportError {
    fn from(err: mongodb::error::Error) -> Self {
        MongoExportError::MongoDb(err)
    }
}

impl From<serde_json::Error> for MongoExportError {
    fn from(err: serde_json::Error) -> Self {
        MongoExportError::Serialization(err)
    }
}

impl From<ConnectionError> for MongoExportError {
    fn from(err: ConnectionError) -> Self {
        MongoExportError::Connection(err)
    }
}

impl From<ExportError> for MongoExportError {
    fn from(err: ExportError) -> Self {
        MongoExportError::Export(err)
    }
}

impl From<ConfigError> for MongoExportError {
    fn from(err: ConfigError) -> Self {
        MongoExportError::Config(err)
    }
}

impl From<String> for MongoExportError {
    fn from(msg: String) -> Self {
        MongoExportError::Generic(msg)
    }
}

impl From<&str> for MongoExportError {
    fn from(msg: &str) -> Self {
        MongoExportError::Generic(msg.to_owned())
    }
}
