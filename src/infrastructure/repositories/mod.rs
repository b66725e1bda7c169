//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! - **PgEmployeeRepository**: PostgreSQL via sqlx
//! - **InMemoryEmployeeRepository**: process-local store for tests and local runs
//!
//! ```rust,ignore
//! use backoffice_server::infrastructure::repositories::PgEmployeeRepository;
//!
//! let repo = PgEmployeeRepository::new(pool.clone());
//! ```

pub mod employee_repository;
pub mod memory_repository;

pub use employee_repository::PgEmployeeRepository;
pub use memory_repository::InMemoryEmployeeRepository;
