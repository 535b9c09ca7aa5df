use anyhow::{bail, Result};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, Mutex};

use crate::store::{Todo, TodoStore};

/// In-process store for handler tests
///
/// Keeps insertion order, like a collection scan over a fresh MongoDB
/// collection. An `unavailable` store fails every call, standing in for an
/// unreachable server.
#[derive(Clone, Default)]
pub struct MemoryStore {
    todos: Arc<Mutex<Vec<Todo>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Store a todo as-is, bypassing `insert`
    pub fn push(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    pub fn len(&self) -> usize {
        self.todos.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            bail!("store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, title: String) -> Result<ObjectId> {
        self.check_available()?;
        let id = ObjectId::new();
        self.todos.lock().unwrap().push(Todo {
            id,
            title: Some(title),
            done: Some(false),
        });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        self.check_available()?;
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn get(&self, id: &ObjectId) -> Result<Option<Todo>> {
        self.check_available()?;
        let todos = self.todos.lock().unwrap();
        Ok(todos.iter().find(|t| t.id == *id).cloned())
    }

    async fn update(&self, id: &ObjectId, title: String, done: bool) -> Result<bool> {
        self.check_available()?;
        let mut todos = self.todos.lock().unwrap();
        match todos.iter_mut().find(|t| t.id == *id) {
            Some(todo) => {
                todo.title = Some(title);
                todo.done = Some(done);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool> {
        self.check_available()?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id != *id);
        Ok(todos.len() < before)
    }

    async fn ping(&self) -> Result<()> {
        self.check_available()
    }
}
