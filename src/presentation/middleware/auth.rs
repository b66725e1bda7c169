//! Authentication Middleware
//!
//! Admin token validation for protected routes. The token is read from the
//! header named by `jwt.admin_token_name`, falling back to
//! `Authorization: Bearer`.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::application::Actor;
use crate::shared::error::AppError;
use crate::shared::jwt;
use crate::startup::AppState;

/// Validates the admin token and inserts the caller's [`Actor`] into request extensions
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let settings = &state.settings.jwt;

    let token = extract_token(request.headers(), &settings.admin_token_name)
        .ok_or_else(|| AppError::Unauthorized("Missing token".into()))?;

    let claims = jwt::parse_token(&settings.admin_secret_key, &token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected admin token");
        AppError::from(e)
    })?;

    tracing::debug!(employee_id = claims.emp_id, "Admin token verified");
    request.extensions_mut().insert(Actor::new(claims.emp_id));

    Ok(next.run(request).await)
}

/// Token from the configured header (optional `Bearer ` prefix), else from `Authorization`.
fn extract_token(headers: &HeaderMap, header_name: &str) -> Option<String> {
    let from_named = headers
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim())
        .map(|value| value.strip_prefix("Bearer ").unwrap_or(value))
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    from_named.or_else(|| {
        headers
            .typed_get::<Authorization<Bearer>>()
            .map(|Authorization(bearer)| bearer.token().to_owned())
    })
}
