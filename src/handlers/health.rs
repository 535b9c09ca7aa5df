use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Liveness check
///
/// Always returns 200 with a fixed payload. Does not touch the store.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// GET /ready handler - Readiness check
///
/// Pings MongoDB. Returns 200 OK if the store is reachable,
/// 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::READY,
    responses(
        (status = 200, description = "Store is reachable", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.store.ping().await {
        Ok(_) => {
            tracing::debug!("Readiness check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "ready".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Readiness check failed: {:#}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unavailable".to_string(),
                    error: format!("Cannot connect to database: {}", e),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{send, test_app, unavailable_app};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = test_app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_health_ignores_store_state() {
        let app = unavailable_app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_ready_endpoint_ready() {
        let (app, _) = test_app();

        let (status, body) = send(&app, Method::GET, "/ready", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_ready_endpoint_unavailable() {
        let app = unavailable_app();

        let (status, body) = send(&app, Method::GET, "/ready", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert!(body["error"].as_str().unwrap().contains("Cannot connect to database"));
    }
}
