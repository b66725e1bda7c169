//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod employee;
pub mod health;
