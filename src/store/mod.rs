//! Document store abstraction
//!
//! The export workflow talks to the database only through two traits:
//!
//! 1. **Connector**: turns a connection string into a live store handle
//! 2. **DocumentStore**: lists databases and collections, and reads documents
//!
//! [`MongoStore`] and [`crate::connection::ConnectionManager`] back them with the
//! MongoDB driver; tests substitute an in-memory store.

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::Result;

pub mod mongo;

pub use mongo::MongoStore;

/// Read access to a document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List database names visible to the current credentials, in server order
    async fn list_database_names(&self) -> Result<Vec<String>>;

    /// List collection names of a database, in server order
    async fn list_collection_names(&self, database: &str) -> Result<Vec<String>>;

    /// Read every document of a collection, applying a field projection
    ///
    /// # Arguments
    /// * `database` - Database name
    /// * `collection` - Collection name
    /// * `projection` - Projection document (`{ field: 0 }` excludes a field)
    ///
    /// # Returns
    /// * `Result<Vec<Document>>` - Documents in natural store order
    async fn find_all(
        &self,
        database: &str,
        collection: &str,
        projection: Document,
    ) -> Result<Vec<Document>>;
}

/// Factory for store handles
#[async_trait]
pub trait Connector: Send + Sync {
    /// Store produced by a successful connection
    type Store: DocumentStore;

    /// Establish a handle for the given connection string
    async fn connect(&self, uri: &str) -> Result<Self::Store>;
}
