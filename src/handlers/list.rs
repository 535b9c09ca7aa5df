use crate::error::{ApiError, ErrorResponse};
use crate::models::{ListTodosResponse, TodoResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /todos handler - List all todos
///
/// Returns every todo in the order the store yields them. No pagination.
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "All todos", body = ListTodosResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListTodosResponse>), ApiError> {
    let todos: Vec<TodoResponse> = state
        .store
        .list()
        .await?
        .into_iter()
        .map(TodoResponse::from)
        .collect();

    tracing::info!("Listed {} todos", todos.len());
    Ok((StatusCode::OK, Json(ListTodosResponse { todos })))
}
