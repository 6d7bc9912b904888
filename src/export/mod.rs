//! Collection export
//!
//! Reads documents from a [`DocumentStore`] and writes them as JSON files:
//!
//! - **Single collection**: `<collection>.json`, a JSON array of documents
//! - **All collections**: `<database>_all_collections.json`, a JSON object
//!   mapping each collection name to its document array
//!
//! The identifier field is projected out on read. Bulk exports re-query the
//! collection names at export time and accumulate every collection before
//! writing once, so a failed read leaves no partial file behind.

use std::path::{Path, PathBuf};
use std::time::Instant;

use mongodb::bson::{Document, doc};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::convert::{JsonConverter, JsonDocument};
use crate::error::{ExportError, Result};
use crate::store::DocumentStore;

pub mod progress;
pub mod writer;

pub use progress::ProgressTracker;
pub use writer::JsonArtifactWriter;

/// Store-assigned identifier field, excluded from every export
pub const IDENTIFIER_FIELD: &str = "_id";

/// Synthetic collection entry selecting every collection
pub const ALL_COLLECTIONS: &str = "All";

/// What the operator asked to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every collection of the database
    All,

    /// One named collection
    Collection(String),
}

impl Selection {
    /// Interpret a selection string as shown in the collection listing
    ///
    /// Returns `None` for an empty selection. The literal `"All"` maps to
    /// [`Selection::All`].
    pub fn parse(selection: &str) -> Option<Self> {
        match selection {
            "" => None,
            ALL_COLLECTIONS => Some(Selection::All),
            name => Some(Selection::Collection(name.to_string())),
        }
    }
}

/// Kind of export that produced a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportKind {
    /// A single collection was exported
    Collection(String),

    /// All collections of a database were exported
    AllCollections { database: String },
}

/// Result of an export operation
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// What was exported
    pub kind: ExportKind,
    /// File that was written
    pub path: PathBuf,
    /// Documents written per collection, in export order
    pub collections: Vec<(String, usize)>,
    /// File size in bytes
    pub file_size_bytes: u64,
    /// Time taken for export
    pub elapsed_ms: u64,
}

impl ExportReport {
    /// Total number of documents written
    pub fn documents_exported(&self) -> usize {
        self.collections.iter().map(|(_, count)| count).sum()
    }
}

/// Projection excluding the identifier field
pub fn identifier_projection() -> Document {
    doc! { IDENTIFIER_FIELD: 0 }
}

/// File name for a single-collection export
pub fn collection_file_name(collection: &str) -> String {
    format!("{collection}.json")
}

/// File name for a bulk export of a database
pub fn all_collections_file_name(database: &str) -> String {
    format!("{database}_all_collections.json")
}

/// Exporter bound to one store and output configuration
pub struct Exporter<'a, S: DocumentStore + ?Sized> {
    /// Store to read documents from
    store: &'a S,
    /// Output directory
    output_dir: PathBuf,
    /// Writer for the JSON files
    writer: JsonArtifactWriter,
    /// Whether to display a progress bar during bulk exports
    progress: bool,
    /// Converter from BSON to JSON
    converter: JsonConverter,
}

impl<'a, S: DocumentStore + ?Sized> Exporter<'a, S> {
    /// Create a new exporter
    ///
    /// # Arguments
    /// * `store` - Store to read from
    /// * `config` - Export output configuration
    pub fn new(store: &'a S, config: &ExportConfig) -> Self {
        Self {
            store,
            output_dir: config.output_dir.clone(),
            writer: JsonArtifactWriter::new(config.indent),
            progress: config.progress,
            converter: JsonConverter::new(),
        }
    }

    /// Export according to a parsed selection
    pub async fn export(&self, database: &str, selection: &Selection) -> Result<ExportReport> {
        match selection {
            Selection::All => self.export_all(database).await,
            Selection::Collection(name) => self.export_collection(database, name).await,
        }
    }

    /// Export one collection to `<collection>.json`
    ///
    /// # Arguments
    /// * `database` - Database name
    /// * `collection` - Collection name
    ///
    /// # Returns
    /// * `Result<ExportReport>` - Export statistics or error
    pub async fn export_collection(&self, database: &str, collection: &str) -> Result<ExportReport> {
        let start_time = Instant::now();
        self.ensure_output_dir()?;
        info!("Exporting collection '{}' from database '{}'", collection, database);

        let documents = self.read_collection(database, collection).await?;
        let count = documents.len();

        let path = self.output_dir.join(collection_file_name(collection));
        let file_size_bytes = self.writer.write(&path, &documents).await?;

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Export completed: {} documents, {} bytes, {} ms",
            count, file_size_bytes, elapsed_ms
        );

        Ok(ExportReport {
            kind: ExportKind::Collection(collection.to_string()),
            path,
            collections: vec![(collection.to_string(), count)],
            file_size_bytes,
            elapsed_ms,
        })
    }

    /// Export every collection to `<database>_all_collections.json`
    ///
    /// Collection names are queried at export time. All documents are
    /// accumulated before the single write.
    pub async fn export_all(&self, database: &str) -> Result<ExportReport> {
        let start_time = Instant::now();
        self.ensure_output_dir()?;
        info!("Exporting all collections from database '{}'", database);

        let names = self.store.list_collection_names(database).await?;
        debug!("Found {} collections to export", names.len());

        let tracker = ProgressTracker::new(names.len() as u64, self.progress);
        let mut all_data = serde_json::Map::new();
        let mut collections = Vec::with_capacity(names.len());

        for name in names {
            tracker.start_collection(&name);
            let documents = match self.read_collection(database, &name).await {
                Ok(docs) => docs,
                Err(e) => {
                    tracker.finish();
                    return Err(e);
                }
            };
            tracker.finish_collection();

            collections.push((name.clone(), documents.len()));
            all_data.insert(
                name,
                JsonValue::Array(documents.into_iter().map(JsonValue::Object).collect()),
            );
        }
        tracker.finish();

        let path = self.output_dir.join(all_collections_file_name(database));
        let file_size_bytes = self.writer.write(&path, &all_data).await?;

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Export completed: {} collections, {} bytes, {} ms",
            collections.len(),
            file_size_bytes,
            elapsed_ms
        );

        Ok(ExportReport {
            kind: ExportKind::AllCollections {
                database: database.to_string(),
            },
            path,
            collections,
            file_size_bytes,
            elapsed_ms,
        })
    }

    /// Read one collection with the identifier projected out
    async fn read_collection(&self, database: &str, collection: &str) -> Result<Vec<JsonDocument>> {
        let docs = self
            .store
            .find_all(database, collection, identifier_projection())
            .await?;
        debug!("Converting {} documents from '{}'", docs.len(), collection);
        Ok(self.converter.documents(&docs))
    }

    /// Check that the output directory exists
    fn ensure_output_dir(&self) -> Result<()> {
        if !is_directory(&self.output_dir) {
            return Err(ExportError::InvalidOutputDir(self.output_dir.display().to_string()).into());
        }
        Ok(())
    }
}

fn is_directory(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.is_dir()
}
