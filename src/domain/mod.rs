//! # Domain Layer
//!
//! Core business types of the back office, independent of HTTP and storage.
//!
//! ## Structure
//!
//! - **entities**: Employee entity and its repository trait
//! - **value_objects**: Page query / page result
//! - **services**: Password hashing rules

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
