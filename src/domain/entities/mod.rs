//! # Domain Entities
//!
//! Core domain entities. Each maps directly to a database table and owns a
//! repository trait implemented in the infrastructure layer.
//!
//! - **Employee**: back-office account with credentials, status and audit fields

mod employee;

pub use employee::{
    Employee, EmployeeFilter, EmployeePatch, EmployeeRepository, EmployeeStatus, InvalidStatus,
    NewEmployee, MASKED_PASSWORD,
};

#[cfg(test)]
pub use employee::MockEmployeeRepository;
