//! Router assembly: student and common routes plus CORS, body limit and request tracing.

use crate::config::{Config, CorsConfig};
use crate::routes::{common_routes, student_routes};
use crate::state::AppState;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn build_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors))
}

/// Listed origins get credentials and `Content-Length` exposed. No origins, or a
/// `*` entry, falls back to a permissive policy without credentials.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allowed_origins.is_empty() || cors.allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter(|m| m.as_str() != "*")
        .filter_map(|m| m.to_uppercase().parse().ok())
        .collect();
    let headers: Vec<HeaderName> = cors
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();

    let methods = if methods.is_empty() {
        AllowMethods::mirror_request()
    } else {
        AllowMethods::list(methods)
    };
    let headers = if headers.is_empty() {
        AllowHeaders::mirror_request()
    } else {
        AllowHeaders::list(headers)
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(headers)
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
}
