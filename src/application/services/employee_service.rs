//! Employee Service
//!
//! Login verification, account creation, paging, status toggling and
//! profile edits for back-office employees.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::context::Actor;
use crate::domain::services::{hash_password, verify_password, DEFAULT_PASSWORD};
use crate::domain::{
    Employee, EmployeeFilter, EmployeePatch, EmployeeRepository, EmployeeStatus, NewEmployee,
    Page, PageQuery,
};
use crate::shared::error::AppError;

/// Employee service trait
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Verify credentials. Checks existence, then password, then status.
    async fn login(&self, username: &str, password: &str) -> Result<Employee, EmployeeError>;

    /// Create an enabled account with the default password
    async fn save(
        &self,
        actor: &Actor,
        employee: NewEmployeeDto,
    ) -> Result<Employee, EmployeeError>;

    /// One page of employees, newest first
    async fn page_query(
        &self,
        filter: EmployeeFilter,
        query: PageQuery,
    ) -> Result<Page<Employee>, EmployeeError>;

    /// Enable or disable an account. Returns rows affected.
    async fn start_or_stop(&self, status: EmployeeStatus, id: i64) -> Result<u64, EmployeeError>;

    /// Fetch a profile with the password masked
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError>;

    /// Apply a partial profile edit. Returns rows affected.
    async fn update(&self, actor: &Actor, update: UpdateEmployeeDto) -> Result<u64, EmployeeError>;

    /// Check that the employee store is reachable
    async fn health_check(&self) -> Result<(), EmployeeError>;
}

/// Fields copied into a new employee record
#[derive(Debug, Clone, Default)]
pub struct NewEmployeeDto {
    pub username: String,
    pub name: String,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
}

/// Profile edit; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeDto {
    pub id: i64,
    pub username: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<String>,
    pub id_number: Option<String>,
}

/// Employee service errors
#[derive(Debug, thiserror::Error)]
pub enum EmployeeError {
    #[error("account not found")]
    AccountNotFound,

    #[error("password error")]
    PasswordError,

    #[error("account locked")]
    AccountLocked,

    #[error(transparent)]
    Storage(#[from] AppError),
}

impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::AccountNotFound => AppError::AccountNotFound,
            EmployeeError::PasswordError => AppError::PasswordError,
            EmployeeError::AccountLocked => AppError::AccountLocked,
            EmployeeError::Storage(e) => e,
        }
    }
}

/// EmployeeService implementation
pub struct EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    employee_repo: Arc<R>,
}

impl<R> EmployeeServiceImpl<R>
where
    R: EmployeeRepository,
{
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

#[async_trait]
impl<R> EmployeeService for EmployeeServiceImpl<R>
where
    R: EmployeeRepository + 'static,
{
    async fn login(&self, username: &str, password: &str) -> Result<Employee, EmployeeError> {
        let employee = self
            .employee_repo
            .find_by_username(username)
            .await?
            .ok_or(EmployeeError::AccountNotFound)?;

        if !verify_password(password, &employee.password) {
            return Err(EmployeeError::PasswordError);
        }

        if employee.is_disabled() {
            return Err(EmployeeError::AccountLocked);
        }

        Ok(employee)
    }

    async fn save(
        &self,
        actor: &Actor,
        employee: NewEmployeeDto,
    ) -> Result<Employee, EmployeeError> {
        let now = Utc::now();
        let record = NewEmployee {
            username: employee.username,
            name: employee.name,
            password: hash_password(DEFAULT_PASSWORD),
            phone: employee.phone,
            sex: employee.sex,
            id_number: employee.id_number,
            status: EmployeeStatus::Enabled,
            create_time: now,
            update_time: now,
            create_user: Some(actor.employee_id),
            update_user: Some(actor.employee_id),
        };

        let created = self.employee_repo.insert(&record).await?;
        tracing::info!(
            employee_id = created.id,
            username = %created.username,
            created_by = actor.employee_id,
            "Employee created"
        );

        Ok(created)
    }

    async fn page_query(
        &self,
        filter: EmployeeFilter,
        query: PageQuery,
    ) -> Result<Page<Employee>, EmployeeError> {
        let page = self.employee_repo.page(&filter, &query).await?;
        Ok(page.map(Employee::masked))
    }

    async fn start_or_stop(&self, status: EmployeeStatus, id: i64) -> Result<u64, EmployeeError> {
        let rows = self
            .employee_repo
            .update(&EmployeePatch::status(id, status))
            .await?;

        if rows == 0 {
            tracing::warn!(employee_id = id, %status, "Status change matched no employee");
        }

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, EmployeeError> {
        let employee = self.employee_repo.find_by_id(id).await?;
        Ok(employee.map(Employee::masked))
    }

    async fn update(&self, actor: &Actor, update: UpdateEmployeeDto) -> Result<u64, EmployeeError> {
        let patch = EmployeePatch {
            id: update.id,
            username: update.username,
            name: update.name,
            phone: update.phone,
            sex: update.sex,
            id_number: update.id_number,
            update_time: Some(Utc::now()),
            update_user: Some(actor.employee_id),
            ..Default::default()
        };

        let rows = self.employee_repo.update(&patch).await?;
        if rows == 0 {
            tracing::warn!(employee_id = update.id, "Profile edit matched no employee");
        }

        Ok(rows)
    }

    async fn health_check(&self) -> Result<(), EmployeeError> {
        self.employee_repo.ping().await?;
        Ok(())
    }
}
