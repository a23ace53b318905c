use crate::{
    doc::ApiDoc,
    routes::{health, lesson},
};
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router around an already connected database pool
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/lessons", get(lesson::get_lessons))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(db)
}
