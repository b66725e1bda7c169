//! CORS Middleware Configuration

use axum::http::HeaderName;
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Create CORS layer from settings. The admin token header is always allowed.
pub fn create_cors_layer(settings: &CorsSettings, token_header: &str) -> CorsLayer {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let mut headers = vec![
        axum::http::header::CONTENT_TYPE,
        axum::http::header::AUTHORIZATION,
    ];
    if let Ok(name) = HeaderName::try_from(token_header) {
        headers.push(name);
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(headers)
        .max_age(std::time::Duration::from_secs(3600))
}
