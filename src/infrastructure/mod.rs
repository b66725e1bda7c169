//! Infrastructure Layer
//!
//! Storage implementations: PostgreSQL pool, migrations and repositories.

pub mod database;
pub mod repositories;
