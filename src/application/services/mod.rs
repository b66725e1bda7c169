//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! - **EmployeeService**: login, account creation, paging, status and profile edits

pub mod employee_service;

pub use employee_service::{
    EmployeeError, EmployeeService, EmployeeServiceImpl, NewEmployeeDto, UpdateEmployeeDto,
};
