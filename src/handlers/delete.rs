use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_id;
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /todos/{id} handler - Remove a todo
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo id (24-character hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 400, description = "Invalid id format", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id_str)?;

    if !state.store.delete(&id).await? {
        tracing::info!("Todo not found for delete with id: {}", id);
        return Err(ApiError::TodoNotFound);
    }

    tracing::info!("Deleted todo with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Todo deleted".to_string(),
        }),
    ))
}
