use serde::{Deserialize, Serialize};

use crate::store::Todo;

/// Request body for POST /todos
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTodoRequest {
    pub title: String,
}

/// Request body for PUT /todos/{id}
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub done: bool,
}

/// Response type for successful create operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTodoResponse {
    pub message: String,
    pub id: String,
}

/// Response type for update and delete operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// A single todo as returned by the API
///
/// `title` and `done` render as `null` when the stored document lacks them.
#[derive(Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoResponse {
    pub id: String,
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.to_hex(),
            title: todo.title,
            done: todo.done,
        }
    }
}

/// Response type for list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListTodosResponse {
    pub todos: Vec<TodoResponse>,
}
