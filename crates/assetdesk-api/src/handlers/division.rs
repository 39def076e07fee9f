//! Management division handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::types::pagination::PageResponse;
use assetdesk_entity::division::{CreateDivision, Division, UpdateDivision};

use crate::dto::request::{CreateDivisionRequest, SetManagerRequest, UpdateDivisionRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/divisions
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Division>>>, ApiError> {
    let page = state
        .division_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/divisions/{id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Division>>, ApiError> {
    let division = state.division_service.get(id).await?;
    Ok(Json(ApiResponse::ok(division)))
}

/// POST /api/divisions
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateDivisionRequest>,
) -> Result<Json<ApiResponse<Division>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let division = state
        .division_service
        .create(
            &user,
            CreateDivision {
                name: req.name,
                manager_id: req.manager_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(division)))
}

/// PUT /api/divisions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDivisionRequest>,
) -> Result<Json<ApiResponse<Division>>, ApiError> {
    let division = state
        .division_service
        .update(
            &user,
            id,
            UpdateDivision {
                name: req.name,
                manager_id: req.manager_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(division)))
}

/// PUT /api/divisions/{id}/manager
pub async fn set_manager(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetManagerRequest>,
) -> Result<Json<ApiResponse<Division>>, ApiError> {
    let division = state
        .division_service
        .set_manager(&user, id, req.manager_id)
        .await?;
    Ok(Json(ApiResponse::ok(division)))
}

/// DELETE /api/divisions/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.division_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Division deleted".to_string(),
    })))
}
