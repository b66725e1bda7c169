//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod jwt;
pub mod response;
pub mod validation;
