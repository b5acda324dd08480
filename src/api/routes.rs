//! Application route configuration.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Json, Redirect},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::handlers::user_routes;
use super::AppState;
use crate::config::ADMIN_USERS_PATH;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(ADMIN_USERS_PATH, user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint sends the admin to the user listing
async fn root() -> Redirect {
    Redirect::to(ADMIN_USERS_PATH)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: "healthy",
            error: None,
        },
        Err(e) => ServiceStatus {
            status: "unhealthy",
            error: Some(e.to_string()),
        },
    };

    let healthy = database.status == "healthy";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        database,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
