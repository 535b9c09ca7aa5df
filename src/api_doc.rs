use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    CreateTodoRequest, CreateTodoResponse, ListTodosResponse, MessageResponse, TodoResponse,
    UpdateTodoRequest,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-mongo-api",
        version = "1.0.0",
        description = "A minimal todo CRUD service backed by MongoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::health::ready_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            CreateTodoRequest,
            UpdateTodoRequest,
            CreateTodoResponse,
            MessageResponse,
            TodoResponse,
            ListTodosResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "todos", description = "Todo CRUD operations")
    )
)]
pub struct ApiDoc;
