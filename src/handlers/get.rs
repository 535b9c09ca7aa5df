use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_id;
use crate::models::TodoResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /todos/{id} handler - Retrieve a single todo
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo id (24-character hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 400, description = "Invalid id format", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.get(&id).await? {
        Some(todo) => {
            tracing::info!("Successfully retrieved todo with id: {}", id);
            Ok((StatusCode::OK, Json(TodoResponse::from(todo))))
        }
        None => {
            tracing::info!("Todo not found with id: {}", id);
            Err(ApiError::TodoNotFound)
        }
    }
}
