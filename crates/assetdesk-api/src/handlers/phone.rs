//! Phone line handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::types::pagination::PageResponse;
use assetdesk_entity::phone::{AssignPhoneLine, CreatePhoneLine, PhoneLine, UpdatePhoneLine};

use crate::dto::request::{AssignmentRequest, CreatePhoneLineRequest, UpdatePhoneLineRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/phone-lines
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PhoneLine>>>, ApiError> {
    let page = state
        .phone_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/phone-lines/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PhoneLine>>, ApiError> {
    let line = state.phone_service.get(id).await?;
    Ok(Json(ApiResponse::ok(line)))
}

/// POST /api/phone-lines
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreatePhoneLineRequest>,
) -> Result<Json<ApiResponse<PhoneLine>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let line = state
        .phone_service
        .create(
            &user,
            CreatePhoneLine {
                number: req.number,
                carrier: req.carrier,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(line)))
}

/// PUT /api/phone-lines/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePhoneLineRequest>,
) -> Result<Json<ApiResponse<PhoneLine>>, ApiError> {
    let line = state
        .phone_service
        .update(
            &user,
            id,
            UpdatePhoneLine {
                number: req.number,
                carrier: req.carrier,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(line)))
}

/// PUT /api/phone-lines/{id}/assignment
pub async fn assign(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignmentRequest>,
) -> Result<Json<ApiResponse<PhoneLine>>, ApiError> {
    let line = state
        .phone_service
        .assign(
            &user,
            id,
            AssignPhoneLine {
                assigned_to: req.assigned_to,
                approved_by: req.approved_by,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(line)))
}

/// DELETE /api/phone-lines/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.phone_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Phone line deleted".to_string(),
    })))
}
