//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **PageQuery** / **Page**: 1-based page request and page result

mod page;

pub use page::*;
