//! Department handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::types::pagination::PageResponse;
use assetdesk_entity::department::{CreateDepartment, Department, UpdateDepartment};
use assetdesk_entity::employee::Employee;

use crate::dto::request::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/departments
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Department>>>, ApiError> {
    let page = state
        .department_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/departments/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state.department_service.get(id).await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// GET /api/departments/{id}/employees
pub async fn list_employees(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    // 404 for unknown departments rather than an empty list.
    state.department_service.get(id).await?;
    let employees = state.employee_service.list_by_department(id).await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let department = state
        .department_service
        .create(
            &user,
            CreateDepartment {
                name: req.name,
                division_id: req.division_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// PUT /api/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state
        .department_service
        .update(
            &user,
            id,
            UpdateDepartment {
                name: req.name,
                division_id: req.division_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// DELETE /api/departments/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.department_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Department deleted".to_string(),
    })))
}
