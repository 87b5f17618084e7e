use std::{path::Path, time::Duration};

use axum::Router;
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod openapi;

use openapi::ApiDoc;

/// Builds the full application: JSON API under `/api`, health probe,
/// Swagger UI, and the browser page served from `static_dir`.
pub fn app(db: Database, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::health::routes())
        .nest("/api", features::workouts::routes())
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
