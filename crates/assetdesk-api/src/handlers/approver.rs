//! Approving-manager lookup handler.

use axum::Json;
use axum::extract::{Query, State};

use assetdesk_core::error::AppError;
use assetdesk_service::hierarchy::ApproverTarget;

use crate::dto::request::ResolveApproverQuery;
use crate::dto::response::{ApiResponse, ApproverResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/approvers/resolve
///
/// Resolves the manager accountable for approving actions on the given
/// employee or department. `null` means no approver exists, which is a
/// valid outcome, not an error.
pub async fn resolve(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ResolveApproverQuery>,
) -> Result<Json<ApiResponse<Option<ApproverResponse>>>, ApiError> {
    let target = match query.target_type.as_str() {
        "employee" => ApproverTarget::Employee(query.target_id),
        "department" => ApproverTarget::Department(query.target_id),
        other => {
            return Err(AppError::validation(format!(
                "Unknown target type '{other}'. Expected 'employee' or 'department'"
            ))
            .into());
        }
    };

    let resolved = state
        .hierarchy_service
        .resolve(target, query.prefer_global)
        .await?;

    Ok(Json(ApiResponse::ok(resolved.map(ApproverResponse::from))))
}
