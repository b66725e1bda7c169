//! Employee Handlers
//!
//! `/admin/employee` endpoints. Every response is wrapped in [`ApiResponse`].

use axum::extract::State;
use validator::Validate;

use crate::application::dto::{
    CreateEmployeeRequest, EmployeeLoginRequest, EmployeeLoginResponse, EmployeePageQuery,
    EmployeePageResponse, StatusQuery, UpdateEmployeeRequest,
};
use crate::application::Actor;
use crate::domain::{Employee, EmployeeStatus};
use crate::presentation::http::extractors::{AppJson, AppPath, AppQuery};
use crate::shared::error::AppError;
use crate::shared::jwt;
use crate::shared::response::ApiResponse;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Verify credentials and issue an admin token
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<EmployeeLoginRequest>,
) -> Result<ApiResponse<EmployeeLoginResponse>, AppError> {
    tracing::info!(username = %body.username, "Employee login");

    let employee = state.employees.login(&body.username, &body.password).await?;

    let settings = &state.settings.jwt;
    let token = jwt::create_token(&settings.admin_secret_key, settings.admin_ttl_ms, employee.id)?;

    Ok(ApiResponse::success(EmployeeLoginResponse::new(&employee, token)))
}

/// Tokens are stateless, so there is nothing to revoke.
pub async fn logout() -> ApiResponse<()> {
    ApiResponse::ok()
}

/// Create an employee with the default password
pub async fn save(
    State(state): State<AppState>,
    actor: Actor,
    AppJson(body): AppJson<CreateEmployeeRequest>,
) -> Result<ApiResponse<()>, AppError> {
    tracing::info!(?body, actor = actor.employee_id, "Create employee");
    body.validate().map_err(validation_error)?;

    state.employees.save(&actor, body.into()).await?;

    Ok(ApiResponse::ok())
}

/// Page through employees
pub async fn page(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<EmployeePageQuery>,
) -> Result<ApiResponse<EmployeePageResponse>, AppError> {
    tracing::debug!(?query, "Employee page query");
    let (filter, page) = query.into_parts();

    let result = state.employees.page_query(filter, page).await?;

    Ok(ApiResponse::success(result))
}

/// Enable (1) or disable (0) an account
pub async fn start_or_stop(
    State(state): State<AppState>,
    AppPath(status): AppPath<i32>,
    AppQuery(query): AppQuery<StatusQuery>,
) -> Result<ApiResponse<()>, AppError> {
    tracing::info!(status, id = query.id, "Change employee status");
    let status =
        EmployeeStatus::try_from(status).map_err(|e| AppError::BadRequest(e.to_string()))?;

    state.employees.start_or_stop(status, query.id).await?;

    Ok(ApiResponse::ok())
}

/// Fetch one employee; `data` is null when the id is unknown
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<ApiResponse<Employee>, AppError> {
    tracing::info!(id, "Get employee");

    Ok(match state.employees.get_by_id(id).await? {
        Some(employee) => ApiResponse::success(employee),
        None => ApiResponse::ok(),
    })
}

/// Edit an employee profile
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    AppJson(body): AppJson<UpdateEmployeeRequest>,
) -> Result<ApiResponse<()>, AppError> {
    tracing::info!(?body, actor = actor.employee_id, "Edit employee");
    body.validate().map_err(validation_error)?;

    state.employees.update(&actor, body.into()).await?;

    Ok(ApiResponse::ok())
}
