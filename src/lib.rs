//! # Back Office Server Library
//!
//! Employee administration API for a restaurant ordering back office:
//! employee login with signed admin tokens, account creation, paged
//! listings, enable/disable and profile edits.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Employee entity, paging value objects, repository trait
//! - **Application Layer**: Employee service and DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! backoffice_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services, DTOs, request context
//! +-- infrastructure/ Database pool and repositories
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors, response envelope, tokens
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod startup;
pub mod telemetry;
