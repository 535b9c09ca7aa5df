pub mod health;
pub mod create;
pub mod list;
pub mod get;
pub mod update;
pub mod delete;

pub use health::{health_handler, ready_handler};
pub use create::create_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;

use crate::error::ApiError;
use mongodb::bson::oid::ObjectId;

/// Parse a path id into an ObjectId, rejecting anything else with 400
fn parse_id(id_str: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id_str).map_err(|_| ApiError::InvalidId(id_str.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::build_router;
    use crate::state::AppState;
    use crate::store::memory::MemoryStore;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    /// Router over a fresh in-memory store, plus a handle on that store
    pub fn test_app() -> (Router, MemoryStore) {
        let store = MemoryStore::new();
        (build_router(AppState::new(store.clone())), store)
    }

    /// Router whose store fails every call
    pub fn unavailable_app() -> Router {
        build_router(AppState::new(MemoryStore::unavailable()))
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<JsonValue>,
    ) -> (StatusCode, JsonValue) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// POST a todo and return its id
    pub async fn create_todo(app: &Router, title: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/todos",
            Some(serde_json::json!({ "title": title })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }
}
