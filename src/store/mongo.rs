use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection, Database};

use crate::config::Config;
use crate::store::{Todo, TodoStore};

const TODOS_COLLECTION: &str = "todos";

/// Document written for a new todo. `_id` is assigned on insert.
fn new_todo_document(title: String) -> Document {
    doc! { "title": title, "done": false }
}

/// Shareable MongoDB-backed todo store
///
/// `Client` is a handle onto the driver's connection pool, so cloning the
/// store is cheap and every clone shares the same pool.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Create a store from configuration
    ///
    /// The driver connects lazily: this only fails on a malformed connection
    /// string. Use [`TodoStore::ping`] to check the server is reachable.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongo_url)
            .await
            .context("Failed to create MongoDB client")?;
        let db = client.database(&config.mongo_database);

        tracing::info!(database = %config.mongo_database, "MongoDB client ready");

        Ok(Self { client, db })
    }

    fn todos(&self) -> Collection<Todo> {
        self.db.collection(TODOS_COLLECTION)
    }

    #[cfg(test)]
    async fn drop_database(&self) -> Result<()> {
        self.db
            .drop(None)
            .await
            .context("Failed to drop test database")
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn insert(&self, title: String) -> Result<ObjectId> {
        // Insert without an _id so the id comes back from the insert result
        let result = self
            .db
            .collection::<Document>(TODOS_COLLECTION)
            .insert_one(new_todo_document(title), None)
            .await
            .context("Failed to insert todo")?;

        let id = result
            .inserted_id
            .as_object_id()
            .context("Inserted todo id is not an ObjectId")?;

        tracing::debug!("Inserted todo with id: {}", id);
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let cursor = self
            .todos()
            .find(None, None)
            .await
            .context("Failed to query todos")?;

        let todos: Vec<Todo> = cursor
            .try_collect()
            .await
            .context("Failed to read todos from cursor")?;

        tracing::debug!("Listed {} todos", todos.len());
        Ok(todos)
    }

    async fn get(&self, id: &ObjectId) -> Result<Option<Todo>> {
        let todo = self
            .todos()
            .find_one(doc! { "_id": *id }, None)
            .await
            .context("Failed to query todo")?;

        tracing::debug!("Looked up todo {}: found={}", id, todo.is_some());
        Ok(todo)
    }

    async fn update(&self, id: &ObjectId, title: String, done: bool) -> Result<bool> {
        let result = self
            .todos()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "title": title, "done": done } },
                None,
            )
            .await
            .context("Failed to update todo")?;

        tracing::debug!("Updated todo {}: matched={}", id, result.matched_count);
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool> {
        let result = self
            .todos()
            .delete_one(doc! { "_id": *id }, None)
            .await
            .context("Failed to delete todo")?;

        tracing::debug!("Deleted todo {}: deleted={}", id, result.deleted_count);
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }
}
