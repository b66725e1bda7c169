//! # Domain Services
//!
//! Business rules that don't belong to a single entity.
//!
//! - **password**: one-way hashing of employee passwords

mod password;

pub use password::*;
