//! HTTP API
//!
//! Router, handlers and extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
