//! Export session
//!
//! [`ExportSession`] is the context object every front-end drives. It owns
//! the single open store handle, the selected database and the collection
//! listing last shown to the operator, and exposes the workflow operations:
//!
//! 1. `connect` - open a handle and list databases
//! 2. `list_collections` / `select_database` - enumerate collections
//! 3. `export` / `export_collection` / `export_all` - write JSON files
//!
//! Operations run to completion before returning; nothing here is shared
//! across tasks, so there is no locking.

use tracing::{info, warn};

use crate::config::{Config, ConnectionConfig, ExportConfig};
use crate::error::{ConnectionError, ExportError, MongoExportError, Result};
use crate::export::{ALL_COLLECTIONS, ExportReport, Exporter, Selection};
use crate::store::{Connector, DocumentStore};

pub mod message;

pub use message::{Severity, UserMessage};

/// Result of an export request
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    /// The selection was empty; nothing was written
    NothingSelected,

    /// A file was written
    Exported(ExportReport),
}

impl ExportOutcome {
    /// Message to show for this outcome
    pub fn message(&self) -> UserMessage {
        match self {
            ExportOutcome::NothingSelected => UserMessage::no_collection_selected(),
            ExportOutcome::Exported(report) => UserMessage::exported(report),
        }
    }
}

/// Session state shared by the workflow operations
pub struct ExportSession<C: Connector> {
    /// Factory for store handles
    connector: C,
    /// Connection defaults
    connection: ConnectionConfig,
    /// Output settings
    export: ExportConfig,
    /// URI of the open handle
    uri: Option<String>,
    /// Open store handle
    store: Option<C::Store>,
    /// Database names from the last connect
    databases: Vec<String>,
    /// Selected database
    database: Option<String>,
    /// Collection listing for the selected database, `All` first
    collections: Vec<String>,
}

impl<C: Connector> ExportSession<C> {
    /// Create a disconnected session
    ///
    /// # Arguments
    /// * `connector` - Factory for store handles
    /// * `config` - Application configuration
    pub fn new(connector: C, config: &Config) -> Self {
        Self {
            connector,
            connection: config.connection.clone(),
            export: config.export.clone(),
            uri: None,
            store: None,
            databases: Vec::new(),
            database: None,
            collections: Vec::new(),
        }
    }

    /// Connect and list database names
    ///
    /// A blank URI falls back to the configured default. Any previous handle
    /// is dropped first; on failure the session stays disconnected.
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Database names in server order (may be empty)
    pub async fn connect(&mut self, uri: &str) -> Result<Vec<String>> {
        let uri = self.connection.resolve_uri(Some(uri));
        self.reset();

        let result = async {
            let store = self.connector.connect(&uri).await?;
            let names = store.list_database_names().await?;
            Ok::<_, MongoExportError>((store, names))
        }
        .await;

        let (store, names) = result.map_err(into_connection_error)?;
        info!("Connected, {} databases visible", names.len());

        if names.is_empty() {
            warn!("No databases found");
        }

        self.store = Some(store);
        self.uri = Some(uri);
        self.databases = names.clone();
        Ok(names)
    }

    /// List database names through the open handle
    pub async fn list_databases(&mut self) -> Result<Vec<String>> {
        let names = self.store()?.list_database_names().await?;
        self.databases = names.clone();
        Ok(names)
    }

    /// List the collections of a database, preceded by the `All` entry
    pub async fn list_collections(&self, database: &str) -> Result<Vec<String>> {
        if !self.databases.is_empty() && !self.databases.iter().any(|d| d == database) {
            warn!("Database '{}' was not in the last listing", database);
        }

        let names = self.store()?.list_collection_names(database).await?;
        let mut listing = Vec::with_capacity(names.len() + 1);
        listing.push(ALL_COLLECTIONS.to_string());
        listing.extend(names);
        Ok(listing)
    }

    /// Select a database and reload its collection listing
    pub async fn select_database(&mut self, database: &str) -> Result<&[String]> {
        let listing = self.list_collections(database).await?;
        info!("Selected database '{}' ({} collections)", database, listing.len() - 1);
        self.database = Some(database.to_string());
        self.collections = listing;
        Ok(&self.collections)
    }

    /// Export by selection string as shown in the collection listing
    ///
    /// An empty selection is a warning outcome, not an error.
    pub async fn export(&self, selection: &str) -> Result<ExportOutcome> {
        let Some(selection) = Selection::parse(selection) else {
            warn!("No collection selected");
            return Ok(ExportOutcome::NothingSelected);
        };

        let database = self.selected_database()?;
        let report = self.exporter()?.export(database, &selection).await?;
        Ok(ExportOutcome::Exported(report))
    }

    /// Export one collection of the selected database
    pub async fn export_collection(&self, collection: &str) -> Result<ExportReport> {
        let database = self.selected_database()?;
        self.exporter()?.export_collection(database, collection).await
    }

    /// Export every collection of the selected database
    pub async fn export_all(&self) -> Result<ExportReport> {
        let database = self.selected_database()?;
        self.exporter()?.export_all(database).await
    }

    /// Whether a handle is open
    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    /// URI of the open handle
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Selected database name
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Collection listing shown for the selected database
    pub fn collections(&self) -> &[String] {
        &self.collections
    }

    fn store(&self) -> Result<&C::Store> {
        self.store
            .as_ref()
            .ok_or_else(|| ConnectionError::NotConnected.into())
    }

    fn selected_database(&self) -> Result<&str> {
        self.database
            .as_deref()
            .ok_or_else(|| ExportError::NoDatabaseSelected.into())
    }

    fn exporter(&self) -> Result<Exporter<'_, C::Store>> {
        Ok(Exporter::new(self.store()?, &self.export))
    }

    fn reset(&mut self) {
        self.store = None;
        self.uri = None;
        self.databases.clear();
        self.database = None;
        self.collections.clear();
    }
}

/// Report any failure during connect as a connection error with its cause
fn into_connection_error(err: MongoExportError) -> MongoExportError {
    match err {
        MongoExportError::Connection(e) => MongoExportError::Connection(e),
        other => ConnectionError::ConnectionFailed(other.to_string()).into(),
    }
}
