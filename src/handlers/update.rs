use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_id;
use crate::models::{MessageResponse, UpdateTodoRequest};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// PUT /todos/{id} handler - Replace a todo's title and done flag
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo id (24-character hex ObjectId)")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = MessageResponse),
        (status = 400, description = "Invalid id format or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Body is missing `title` or `done`", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id_str)?;
    let Json(request) = body?;

    if !state.store.update(&id, request.title, request.done).await? {
        tracing::info!("Todo not found for update with id: {}", id);
        return Err(ApiError::TodoNotFound);
    }

    tracing::info!("Updated todo with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Todo updated".to_string(),
        }),
    ))
}
