pub mod mongo;
#[cfg(test)]
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub use mongo::MongoStore;

/// A single todo as stored in the `todos` collection
///
/// `title` and `done` are optional on read: documents written by older
/// clients of this collection may carry `null` or omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Persistence operations the HTTP handlers depend on.
///
/// Each method maps to exactly one store operation. Lookups by id report a
/// miss through `Option`/`bool` rather than an error so the handler decides
/// the status code.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a new todo with `done = false` and return its generated id
    async fn insert(&self, title: String) -> Result<ObjectId>;

    /// All todos in store-native order
    async fn list(&self) -> Result<Vec<Todo>>;

    async fn get(&self, id: &ObjectId) -> Result<Option<Todo>>;

    /// Replace title and done. Returns `false` when no todo matched `id`.
    async fn update(&self, id: &ObjectId, title: String, done: bool) -> Result<bool>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: &ObjectId) -> Result<bool>;

    /// Round-trip to the backing store to check it is reachable
    async fn ping(&self) -> Result<()>;
}
