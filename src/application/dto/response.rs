//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::domain::{Employee, Page};

/// Login result: token plus a subset of the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLoginResponse {
    pub id: i64,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub name: String,
    pub token: String,
}

impl EmployeeLoginResponse {
    pub fn new(employee: &Employee, token: String) -> Self {
        Self {
            id: employee.id,
            user_name: employee.username.clone(),
            name: employee.name.clone(),
            token,
        }
    }
}

/// Paged employee listing
pub type EmployeePageResponse = Page<Employee>;
