//! Custom Extractors
//!
//! Axum extractors for request context and request parsing. The parsing
//! wrappers reject with [`AppError`], so malformed input is answered with
//! the same envelope as every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use crate::application::Actor;
use crate::shared::error::AppError;

/// The [`Actor`] inserted by `auth_middleware`. Rejects with 401 on routes
/// that are not behind the middleware.
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Actor>()
            .copied()
            .ok_or_else(|| AppError::Unauthorized("Not logged in".into()))
    }
}

/// JSON body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
