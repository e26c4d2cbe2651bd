pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::ServerConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::liveness,
        api::handlers::health::connection_test,
        api::handlers::health::health_check,
        api::handlers::hashes::compute_digests,
        api::handlers::hashes::compare_files,
        api::handlers::images::compute_pixel_metadata,
        api::handlers::images::resize_image,
        api::handlers::images::grayscale_filter,
    ),
    components(
        schemas(
            api::handlers::health::HealthResponse,
            api::handlers::types::HashResponse,
            api::handlers::types::PixelResponse,
            api::handlers::types::DimensionsBody,
            api::handlers::types::CompareResponse,
            api::handlers::types::ComparedFiles,
            api::handlers::types::ComparedHashes,
            models::DigestSet,
            models::ComparisonResult,
        )
    ),
    tags(
        (name = "system", description = "Liveness and health"),
        (name = "hashes", description = "File digest endpoints"),
        (name = "images", description = "Image inspection and transformation endpoints")
    )
)]
pub struct ApiDoc;

/// Process-wide settings. Requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

pub fn create_app(state: AppState) -> Router {
    use api::handlers::{hashes, health, images};

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health::liveness).post(health::connection_test))
        .route("/health", get(health::health_check))
        .route("/calcula-hash", post(hashes::compute_digests))
        .route("/calcula-pixels", post(images::compute_pixel_metadata))
        .route("/redimensiona-imagem", post(images::resize_image))
        .route("/compara-hashes", post(hashes::compare_files))
        .route("/filtro-imagem", post(images::grayscale_filter))
        // Gateway paths, served without the proxy hop
        .route("/hashAPI", post(hashes::compute_digests))
        .route("/pixelAPI", post(images::compute_pixel_metadata))
        .route("/redimensionaAPI", post(images::resize_image))
        .route("/comparaAPI", post(hashes::compare_files))
        .route("/filtroAPI", post(images::grayscale_filter))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(api::middleware::request_id::request_id_middleware))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                        .expose_headers(Any),
                )
                .layer(DefaultBodyLimit::max(state.config.body_limit())),
        )
        .with_state(state)
}
