//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{NewEmployeeDto, UpdateEmployeeDto};
use crate::domain::{EmployeeFilter, PageQuery};

/// Login request
#[derive(Deserialize)]
pub struct EmployeeLoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for EmployeeLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeLoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Create employee request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 32, message = "Name must be 1-32 characters"))]
    pub name: String,

    #[validate(length(max = 11, message = "Phone must be at most 11 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 2, message = "Sex must be at most 2 characters"))]
    pub sex: Option<String>,

    #[validate(length(max = 18, message = "Id number must be at most 18 characters"))]
    pub id_number: Option<String>,
}

impl From<CreateEmployeeRequest> for NewEmployeeDto {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            username: req.username,
            name: req.name,
            phone: req.phone,
            sex: req.sex,
            id_number: req.id_number,
        }
    }
}

/// Edit employee request. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub id: i64,

    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Name must be 1-32 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 11, message = "Phone must be at most 11 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 2, message = "Sex must be at most 2 characters"))]
    pub sex: Option<String>,

    #[validate(length(max = 18, message = "Id number must be at most 18 characters"))]
    pub id_number: Option<String>,
}

impl From<UpdateEmployeeRequest> for UpdateEmployeeDto {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            id: req.id,
            username: req.username,
            name: req.name,
            phone: req.phone,
            sex: req.sex,
            id_number: req.id_number,
        }
    }
}

/// Employee page query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePageQuery {
    pub name: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl EmployeePageQuery {
    pub fn into_parts(self) -> (EmployeeFilter, PageQuery) {
        (
            EmployeeFilter { name: self.name },
            PageQuery::new(self.page, self.page_size),
        )
    }
}

/// Query parameters of the status toggle endpoint
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub id: i64,
}
