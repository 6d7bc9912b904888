//! Error handling for the export workflow.
//!
//! This module provides:
//! - A crate-wide error type with specific kinds for connection, export and
//!   configuration failures
//! - Structured information extraction from MongoDB driver errors, used to
//!   build the cause line shown to the operator
//!
//! # Example
//!
//! ```rust,no_run
//! use mongo_export::error::{ConnectionError, MongoExportError, Result};
//!
//! fn require_connection(connected: bool) -> Result<()> {
//!     if !connected {
//!         return Err(ConnectionError::NotConnected.into());
//!     }
//!     Ok(())
//! }
//!
//! fn report(err: &MongoExportError) {
//!     eprintln!("{err}");
//! }
//! ```

pub mod kinds;
pub mod mongo;

// Re-export commonly used types
pub use kinds::{ConfigError, ConnectionError, ExportError, MongoExportError, Result};
pub use mongo::{ErrorInfo, describe_mongodb_error};
