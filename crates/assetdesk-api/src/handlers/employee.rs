//! Employee handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::types::pagination::PageResponse;
use assetdesk_entity::device::Device;
use assetdesk_entity::employee::{CreateEmployee, Employee, UpdateEmployee};
use assetdesk_entity::phone::PhoneLine;

use crate::dto::request::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/employees
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Employee>>>, ApiError> {
    let page = state
        .employee_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/employees/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state.employee_service.get(id).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// GET /api/employees/{id}/devices
pub async fn list_devices(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Device>>>, ApiError> {
    // 404 for unknown employees rather than an empty list.
    state.employee_service.get(id).await?;
    let devices = state.device_service.list_by_assignee(id).await?;
    Ok(Json(ApiResponse::ok(devices)))
}

/// GET /api/employees/{id}/phone-lines
pub async fn list_phone_lines(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PhoneLine>>>, ApiError> {
    state.employee_service.get(id).await?;
    let lines = state.phone_service.list_by_assignee(id).await?;
    Ok(Json(ApiResponse::ok(lines)))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let employee = state
        .employee_service
        .create(
            &user,
            CreateEmployee {
                first_name: req.first_name,
                last_name: req.last_name,
                title: req.title,
                is_manager: req.is_manager,
                department_id: req.department_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state
        .employee_service
        .update(
            &user,
            id,
            UpdateEmployee {
                first_name: req.first_name,
                last_name: req.last_name,
                title: req.title,
                is_manager: req.is_manager,
                department_id: req.department_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.employee_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Employee deleted".to_string(),
    })))
}
