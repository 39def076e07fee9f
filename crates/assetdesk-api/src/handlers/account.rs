//! Login account handlers (admin).

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::types::pagination::PageResponse;
use assetdesk_entity::account::Role;
use assetdesk_service::account::NewAccount;

use crate::dto::request::{CreateAccountRequest, ResetPasswordRequest};
use crate::dto::response::{AccountResponse, ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::state::AppState;

/// GET /api/accounts
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<AccountResponse>>>, ApiError> {
    let page = state
        .account_service
        .list(&user, &params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(AccountResponse::from))))
}

/// GET /api/accounts/{id}
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    let account = state.account_service.get(&user, id).await?;
    Ok(Json(ApiResponse::ok(account.into())))
}

/// POST /api/accounts
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAccountRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let role: Role = req.role.parse()?;

    let account = state
        .account_service
        .create(
            &user,
            NewAccount {
                username: req.username,
                password: req.password,
                display_name: req.display_name,
                role,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(account.into())))
}

/// PUT /api/accounts/{id}/password
pub async fn reset_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .account_service
        .reset_password(&user, id, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password reset".to_string(),
    })))
}

/// DELETE /api/accounts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.account_service.delete(&user, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Account deleted".to_string(),
    })))
}
