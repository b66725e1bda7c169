//! Employee entity and repository trait.
//!
//! Maps to the `employee` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Page, PageQuery};
use crate::shared::error::AppError;

/// Placeholder written over the password hash before an employee leaves the service.
pub const MASKED_PASSWORD: &str = "****";

/// Account status, stored as an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "i32", try_from = "i32")]
pub enum EmployeeStatus {
    Disabled = 0,
    #[default]
    Enabled = 1,
}

/// Raised for status values outside {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid employee status: {0}")]
pub struct InvalidStatus(pub i32);

impl EmployeeStatus {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for EmployeeStatus {
    type Error = InvalidStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            other => Err(InvalidStatus(other)),
        }
    }
}

impl From<EmployeeStatus> for i32 {
    fn from(status: EmployeeStatus) -> Self {
        status.as_i32()
    }
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Enabled => write!(f, "enabled"),
        }
    }
}

/// A back-office employee account.
///
/// Maps to the `employee` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - username: VARCHAR(32) NOT NULL UNIQUE
/// - name: VARCHAR(32) NOT NULL
/// - password: VARCHAR(64) NOT NULL (MD5 hex)
/// - phone, sex, id_number: VARCHAR NULL
/// - status: INTEGER NOT NULL DEFAULT 1
/// - create_time, update_time: TIMESTAMPTZ
/// - create_user, update_user: BIGINT NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: EmployeeStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub create_user: Option<i64>,
    pub update_user: Option<i64>,
}

impl Employee {
    pub fn is_disabled(&self) -> bool {
        self.status == EmployeeStatus::Disabled
    }

    /// Replace the password hash with [`MASKED_PASSWORD`].
    pub fn masked(mut self) -> Self {
        self.password = MASKED_PASSWORD.to_string();
        self
    }
}

/// Row to insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub username: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: EmployeeStatus,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub create_user: Option<i64>,
    pub update_user: Option<i64>,
}

/// Partial update of one employee row. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub id: i64,
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub update_time: Option<DateTime<Utc>>,
    pub update_user: Option<i64>,
}

impl EmployeePatch {
    /// Patch that only changes the account status.
    pub fn status(id: i64, status: EmployeeStatus) -> Self {
        Self {
            id,
            status: Some(status),
            ..Default::default()
        }
    }

    /// Apply the set fields onto `employee`.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(username) = &self.username {
            employee.username = username.clone();
        }
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(password) = &self.password {
            employee.password = password.clone();
        }
        if let Some(phone) = &self.phone {
            employee.phone = Some(phone.clone());
        }
        if let Some(sex) = &self.sex {
            employee.sex = Some(sex.clone());
        }
        if let Some(id_number) = &self.id_number {
            employee.id_number = Some(id_number.clone());
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
        if let Some(update_time) = self.update_time {
            employee.update_time = update_time;
        }
        if let Some(update_user) = self.update_user {
            employee.update_user = Some(update_user);
        }
    }
}

/// Optional listing filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Substring match on `name`
    pub name: Option<String>,
}

/// Repository trait for Employee data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by login name.
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError>;

    /// Find an employee by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Insert a new row and return it with its assigned id.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, AppError>;

    /// One page of employees matching `filter`, newest first, plus the total count.
    async fn page(
        &self,
        filter: &EmployeeFilter,
        query: &PageQuery,
    ) -> Result<Page<Employee>, AppError>;

    /// Apply a partial update. Returns the number of rows affected.
    async fn update(&self, patch: &EmployeePatch) -> Result<u64, AppError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
