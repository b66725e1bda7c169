//! Employee Repository Implementation
//!
//! PostgreSQL implementation of the EmployeeRepository trait.
//! Paging is done with explicit LIMIT/OFFSET taken from [`PageQuery`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    Employee, EmployeeFilter, EmployeePatch, EmployeeRepository, EmployeeStatus, NewEmployee,
    Page, PageQuery,
};
use crate::shared::error::AppError;

/// Database row representation of the `employee` table.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    username: String,
    name: String,
    password: String,
    phone: Option<String>,
    sex: Option<String>,
    id_number: Option<String>,
    status: i32,
    create_time: DateTime<Utc>,
    update_time: DateTime<Utc>,
    create_user: Option<i64>,
    update_user: Option<i64>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let status = EmployeeStatus::try_from(row.status)
            .map_err(|e| AppError::Internal(format!("employee {}: {}", row.id, e)))?;

        Ok(Employee {
            id: row.id,
            username: row.username,
            name: row.name,
            password: row.password,
            phone: row.phone,
            sex: row.sex,
            id_number: row.id_number,
            status,
            create_time: row.create_time,
            update_time: row.update_time,
            create_user: row.create_user,
            update_user: row.update_user,
        })
    }
}

const EMPLOYEE_COLUMNS: &str = "id, username, name, password, phone, sex, id_number, status, \
     create_time, update_time, create_user, update_user";

/// Build a `LIKE` pattern matching `value` anywhere, with wildcards escaped.
/// Blank filters are treated as absent.
pub(crate) fn contains_pattern(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

fn map_unique_violation(e: sqlx::Error, username: Option<&str>) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::AlreadyExists(format!("username {}", username.unwrap_or_default()))
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL employee repository implementation.
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Create a new PgEmployeeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Employee::try_from).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Employee::try_from).transpose()
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, AppError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            INSERT INTO employee (username, name, password, phone, sex, id_number, status,
                                  create_time, update_time, create_user, update_user)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(&employee.username)
        .bind(&employee.name)
        .bind(&employee.password)
        .bind(&employee.phone)
        .bind(&employee.sex)
        .bind(&employee.id_number)
        .bind(employee.status.as_i32())
        .bind(employee.create_time)
        .bind(employee.update_time)
        .bind(employee.create_user)
        .bind(employee.update_user)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, Some(&employee.username)))?;

        Employee::try_from(row)
    }

    async fn page(
        &self,
        filter: &EmployeeFilter,
        query: &PageQuery,
    ) -> Result<Page<Employee>, AppError> {
        let name_pattern = contains_pattern(filter.name.as_deref());

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM employee
            WHERE ($1::TEXT IS NULL OR name LIKE $1 ESCAPE '\')
            "#,
        )
        .bind(&name_pattern)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, EmployeeRow>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employee
            WHERE ($1::TEXT IS NULL OR name LIKE $1 ESCAPE '\')
            ORDER BY create_time DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(&name_pattern)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(Employee::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(total, records))
    }

    async fn update(&self, patch: &EmployeePatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE employee
            SET username = COALESCE($2, username),
                name = COALESCE($3, name),
                password = COALESCE($4, password),
                phone = COALESCE($5, phone),
                sex = COALESCE($6, sex),
                id_number = COALESCE($7, id_number),
                status = COALESCE($8, status),
                update_time = COALESCE($9, update_time),
                update_user = COALESCE($10, update_user)
            WHERE id = $1
            "#,
        )
        .bind(patch.id)
        .bind(&patch.username)
        .bind(&patch.name)
        .bind(&patch.password)
        .bind(&patch.phone)
        .bind(&patch.sex)
        .bind(&patch.id_number)
        .bind(patch.status.map(EmployeeStatus::as_i32))
        .bind(patch.update_time)
        .bind(patch.update_user)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, patch.username.as_deref()))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
