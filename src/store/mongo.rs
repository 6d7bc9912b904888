//! MongoDB-backed document store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Client;
use mongodb::bson::{Document, doc};
use tracing::debug;

use crate::error::{ExportError, MongoExportError, Result};

use super::DocumentStore;

/// Document store backed by a connected MongoDB client
#[derive(Clone)]
pub struct MongoStore {
    /// MongoDB client instance
    client: Client,
}

impl MongoStore {
    /// Wrap a connected client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_database_names(&self) -> Result<Vec<String>> {
        Ok(self.client.list_database_names().await?)
    }

    async fn list_collection_names(&self, database: &str) -> Result<Vec<String>> {
        Ok(self.client.database(database).list_collection_names().await?)
    }

    async fn find_all(
        &self,
        database: &str,
        collection: &str,
        projection: Document,
    ) -> Result<Vec<Document>> {
        let read_failed = |e: mongodb::error::Error| -> MongoExportError {
            ExportError::ReadFailed {
                collection: collection.to_string(),
                reason: crate::error::describe_mongodb_error(&e),
            }
            .into()
        };

        let coll = self
            .client
            .database(database)
            .collection::<Document>(collection);

        let cursor = coll
            .find(doc! {})
            .projection(projection)
            .await
            .map_err(read_failed)?;

        let docs: Vec<Document> = cursor.try_collect().await.map_err(read_failed)?;
        debug!(
            "Read {} documents from {}.{}",
            docs.len(),
            database,
            collection
        );

        Ok(docs)
    }
}
