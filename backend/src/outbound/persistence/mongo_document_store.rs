//! MongoDB-backed document store.
//!
//! One [`mongodb::Client`] is shared by every request; the driver handles
//! pooling and connection safety. Failures that mean the server cannot be
//! reached map to [`DocumentStoreError::Unavailable`], everything else to
//! [`DocumentStoreError::Query`].

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bson::{Document, doc};
use futures_util::TryStreamExt;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use super::MongoSettings;
use crate::domain::DocumentId;
use crate::domain::document_mapper::ID_FIELD;
use crate::domain::ports::{DeleteOutcome, DocumentStore, DocumentStoreError, UpdateOutcome};

const APP_NAME: &str = "inventory-backend";

/// Document store over a live MongoDB database.
#[derive(Debug)]
pub struct MongoDocumentStore {
    client: Client,
    database: Database,
    connected: AtomicBool,
}

impl MongoDocumentStore {
    /// Connect using `settings` and verify the server answers a `ping`.
    ///
    /// Fails with `Unavailable` when no server can be selected within the
    /// configured timeout.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, DocumentStoreError> {
        let mut options = ClientOptions::parse(settings.connection_uri())
            .await
            .map_err(map_driver_error)?;
        options.app_name = Some(APP_NAME.to_owned());
        options.server_selection_timeout = Some(settings.server_selection_timeout());

        let client = Client::with_options(options).map_err(map_driver_error)?;
        let database = client.database(settings.database());
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_driver_error)?;

        info!(
            uri = %settings.redacted_uri(),
            database = settings.database(),
            "connected to MongoDB"
        );
        Ok(Self {
            client,
            database,
            connected: AtomicBool::new(true),
        })
    }

    /// Close the client. Later calls report the store as unavailable.
    pub async fn shutdown(&self) {
        self.connected.store(false, Ordering::SeqCst);
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

fn by_id(id: &DocumentId) -> Document {
    let mut filter = Document::new();
    filter.insert(ID_FIELD, *id.as_object_id());
    filter
}

fn map_driver_error(err: MongoError) -> DocumentStoreError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => {
            DocumentStoreError::unavailable(err.to_string())
        }
        _ => DocumentStoreError::query(err.to_string()),
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn is_available(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, DocumentStoreError> {
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(map_driver_error)?;
        let key = result.inserted_id.as_object_id().ok_or_else(|| {
            DocumentStoreError::query(format!(
                "{collection} insert returned a non-ObjectId key: {}",
                result.inserted_id
            ))
        })?;
        debug!(collection, id = %key, "document inserted");
        Ok(key.into())
    }

    async fn find_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError> {
        self.collection(collection)
            .find_one(by_id(id))
            .await
            .map_err(map_driver_error)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        let cursor = self
            .collection(collection)
            .find(doc! {})
            .await
            .map_err(map_driver_error)?;
        cursor
            .try_collect::<Vec<_>>()
            .await
            .map_err(map_driver_error)
    }

    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        changes: Document,
    ) -> Result<UpdateOutcome, DocumentStoreError> {
        let result = self
            .collection(collection)
            .update_one(by_id(id), doc! { "$set": changes })
            .await
            .map_err(map_driver_error)?;
        Ok(if result.matched_count == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, DocumentStoreError> {
        let result = self
            .collection(collection)
            .delete_one(by_id(id))
            .await
            .map_err(map_driver_error)?;
        Ok(if result.deleted_count == 0 {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted
        })
    }
}
