//! In-memory store and connector for workflow tests

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::error::{ConnectionError, ExportError, Result};
use crate::store::{Connector, DocumentStore};

/// Document store kept in memory, preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    databases: Vec<(String, Vec<(String, Vec<Document>)>)>,
    failing_collection: Option<String>,
    unreachable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty database
    pub fn with_database(mut self, name: &str) -> Self {
        self.database_mut(name);
        self
    }

    /// Add a collection (and its database if needed)
    pub fn with_collection(mut self, database: &str, collection: &str, docs: Vec<Document>) -> Self {
        self.database_mut(database)
            .push((collection.to_string(), docs));
        self
    }

    /// Make reads of the named collection fail
    pub fn failing_reads_for(mut self, collection: &str) -> Self {
        self.failing_collection = Some(collection.to_string());
        self
    }

    /// Make every listing fail as if the server went away
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Replace the collections of a database after construction
    pub fn set_collections(&mut self, database: &str, collections: Vec<(&str, Vec<Document>)>) {
        let db = self.database_mut(database);
        db.clear();
        db.extend(
            collections
                .into_iter()
                .map(|(name, docs)| (name.to_string(), docs)),
        );
    }

    fn database_mut(&mut self, name: &str) -> &mut Vec<(String, Vec<Document>)> {
        let index = match self.databases.iter().position(|(db, _)| db == name) {
            Some(index) => index,
            None => {
                self.databases.push((name.to_string(), Vec::new()));
                self.databases.len() - 1
            }
        };
        &mut self.databases[index].1
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unreachable {
            return Err(ConnectionError::ConnectionFailed("server selection timed out".into()).into());
        }
        Ok(())
    }
}

/// Apply a projection that only excludes fields (`{ field: 0 }`)
fn apply_exclusions(doc: &Document, projection: &Document) -> Document {
    let excluded: Vec<&str> = projection
        .iter()
        .filter(|(_, v)| matches!(v, Bson::Int32(0) | Bson::Int64(0) | Bson::Boolean(false)))
        .map(|(k, _)| k.as_str())
        .collect();

    doc.iter()
        .filter(|(k, _)| !excluded.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_database_names(&self) -> Result<Vec<String>> {
        self.check_reachable()?;
        Ok(self.databases.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn list_collection_names(&self, database: &str) -> Result<Vec<String>> {
        self.check_reachable()?;
        Ok(self
            .databases
            .iter()
            .find(|(name, _)| name == database)
            .map(|(_, colls)| colls.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default())
    }

    async fn find_all(
        &self,
        database: &str,
        collection: &str,
        projection: Document,
    ) -> Result<Vec<Document>> {
        self.check_reachable()?;
        if self.failing_collection.as_deref() == Some(collection) {
            return Err(ExportError::ReadFailed {
                collection: collection.to_string(),
                reason: "cursor killed".to_string(),
            }
            .into());
        }

        let docs = self
            .databases
            .iter()
            .find(|(name, _)| name == database)
            .and_then(|(_, colls)| colls.iter().find(|(name, _)| name == collection))
            .map(|(_, docs)| docs.iter().map(|d| apply_exclusions(d, &projection)).collect())
            .unwrap_or_default();
        Ok(docs)
    }
}

/// Connector handing out clones of preconfigured stores per URI
#[derive(Debug, Default)]
pub struct MemoryConnector {
    stores: Vec<(String, MemoryStore)>,
    attempts: Mutex<Vec<String>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the store returned for a URI
    pub fn with_store(mut self, uri: &str, store: MemoryStore) -> Self {
        self.stores.push((uri.to_string(), store));
        self
    }

    /// URIs passed to `connect`, in call order
    pub fn attempts(&self) -> Vec<String> {
        self.attempts
            .lock()
            .map(|a| a.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    type Store = MemoryStore;

    async fn connect(&self, uri: &str) -> Result<MemoryStore> {
        if let Ok(mut attempts) = self.attempts.lock() {
            attempts.push(uri.to_string());
        }
        self.stores
            .iter()
            .find(|(u, _)| u == uri)
            .map(|(_, store)| store.clone())
            .ok_or_else(|| ConnectionError::ConnectionFailed(format!("no route to {uri}")).into())
    }
}
