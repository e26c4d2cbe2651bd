use axum::{Json, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

pub const LIVENESS_MESSAGE: &str = "Está conectado!";

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Plain text liveness string", body = String)
    ),
    tag = "system"
)]
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Connection test used by the gateway: the liveness string as JSON
#[utoipa::path(
    post,
    path = "/",
    responses(
        (status = 200, description = "Liveness string as a JSON string", body = String)
    ),
    tag = "system"
)]
pub async fn connection_test() -> Json<&'static str> {
    Json(LIVENESS_MESSAGE)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "System health status", body = HealthResponse)
    ),
    tag = "system"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
