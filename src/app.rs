use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, CorsConfig};
use crate::routes::{documents, health};

/// Build the complete HTTP application. Handlers hold no state, so the
/// config is only consulted here for layer settings.
pub fn build_router(config: &AppConfig) -> Router {
    let documents = Router::new()
        .route("/documents/upload", post(documents::upload))
        .layer(DefaultBodyLimit::max(config.upload.max_body_bytes))
        .route("/documents/validate", post(documents::validate));

    let app = Router::new()
        .route("/health", get(health::health_check))
        .merge(documents);

    #[cfg(feature = "openapi")]
    let app = {
        use utoipa::OpenApi;
        use utoipa_redoc::{Redoc, Servable};

        let spec = crate::openapi::ApiDoc::openapi();
        app.route(
            "/api-docs/openapi.json",
            get({
                let spec = spec.clone();
                move || {
                    let spec = spec.clone();
                    async move { axum::Json(spec) }
                }
            }),
        )
        .merge(Redoc::with_url("/docs", spec))
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.cors)),
    )
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
