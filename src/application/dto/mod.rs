//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{
    CreateEmployeeRequest, EmployeeLoginRequest, EmployeePageQuery, StatusQuery,
    UpdateEmployeeRequest,
};
pub use response::{EmployeeLoginResponse, EmployeePageResponse};
