//! Device handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::types::pagination::PageResponse;
use assetdesk_entity::device::{AssignDevice, CreateDevice, Device, UpdateDevice};

use crate::dto::request::{AssignmentRequest, CreateDeviceRequest, UpdateDeviceRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/devices
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Device>>>, ApiError> {
    let page = state
        .device_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/devices/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Device>>, ApiError> {
    let device = state.device_service.get(id).await?;
    Ok(Json(ApiResponse::ok(device)))
}

/// POST /api/devices
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<Json<ApiResponse<Device>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let device = state
        .device_service
        .create(
            &user,
            CreateDevice {
                name: req.name,
                serial_number: req.serial_number,
                category: req.category,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(device)))
}

/// PUT /api/devices/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDeviceRequest>,
) -> Result<Json<ApiResponse<Device>>, ApiError> {
    let device = state
        .device_service
        .update(
            &user,
            id,
            UpdateDevice {
                name: req.name,
                serial_number: req.serial_number,
                category: req.category,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(device)))
}

/// PUT /api/devices/{id}/assignment
pub async fn assign(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignmentRequest>,
) -> Result<Json<ApiResponse<Device>>, ApiError> {
    let device = state
        .device_service
        .assign(
            &user,
            id,
            AssignDevice {
                assigned_to: req.assigned_to,
                approved_by: req.approved_by,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(device)))
}

/// DELETE /api/devices/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.device_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Device deleted".to_string(),
    })))
}
