use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateTodoRequest, CreateTodoResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /todos handler - Create a todo
///
/// New todos always start with `done = false`. Responds 200 rather than 201
/// to stay compatible with existing clients.
#[utoipa::path(
    post,
    path = routes::TODOS,
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Todo created", body = CreateTodoResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Body is missing `title`", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTodoResponse>), ApiError> {
    let Json(request) = body?;

    let id = state.store.insert(request.title).await?;

    tracing::info!("Created todo with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(CreateTodoResponse {
            message: "Todo created".to_string(),
            id: id.to_hex(),
        }),
    ))
}
