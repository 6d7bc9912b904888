//! MongoDB Export Library
//!
//! Core functionality for exporting MongoDB collections to JSON files. It can
//! be driven by the bundled command-line front-end or embedded in other tools.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `connection`: MongoDB client creation
//! - `convert`: BSON to JSON conversion
//! - `error`: Error types and handling
//! - `export`: Single-collection and bulk JSON export
//! - `session`: Workflow state shared by front-ends
//! - `shell`: Interactive export shell
//! - `store`: Document store abstraction
//!
//! # Example
//!
//! ```no_run
//! use mongo_export::{Config, ConnectionManager, ExportSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let connector = ConnectionManager::new(config.connection.clone());
//!     let mut session = ExportSession::new(connector, &config);
//!
//!     let databases = session.connect("mongodb://localhost:27017/").await?;
//!     if let Some(first) = databases.first() {
//!         session.select_database(first).await?;
//!         let report = session.export_all().await?;
//!         println!("Wrote {}", report.path.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod connection;
pub mod convert;
pub mod error;
pub mod export;
pub mod session;
pub mod shell;
pub mod store;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::Config;
pub use connection::ConnectionManager;
pub use error::{MongoExportError, Result};
pub use export::{ExportReport, Exporter, Selection};
pub use session::{ExportOutcome, ExportSession, UserMessage};
pub use store::{Connector, DocumentStore, MongoStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
