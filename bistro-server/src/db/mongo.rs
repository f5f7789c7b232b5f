//! MongoDB document store
//!
//! One [`Client`] per process, created at boot and shared through
//! `ServerState`. The driver pools connections internally.

use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};
use shared::document::bson_to_json;
use shared::models::{DeleteResult, InsertResult, UpdateResult};

use super::store::{DbResult, DocumentStore};

#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Build a client for `uri` pinned to Stable API v1 and select `db_name`
    ///
    /// The driver connects lazily; call [`DocumentStore::ping`] to verify
    /// the deployment is reachable.
    pub async fn connect(uri: &str, db_name: &str) -> DbResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let database = client.database(db_name);
        Ok(Self { client, database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> DbResult<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> DbResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> DbResult<InsertResult> {
        let result = self.collection(collection).insert_one(document).await?;
        Ok(InsertResult {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> DbResult<UpdateResult> {
        let result = self
            .collection(collection)
            .update_one(filter, update)
            .await?;
        Ok(UpdateResult {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id.map(bson_to_json),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> DbResult<DeleteResult> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> DbResult<()> {
        let mut keys = Document::new();
        keys.insert(field, 1);
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let result = self.collection(collection).create_index(index).await?;
        tracing::debug!(collection, index = %result.index_name, "Unique index ready");
        Ok(())
    }

    async fn ping(&self) -> DbResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
