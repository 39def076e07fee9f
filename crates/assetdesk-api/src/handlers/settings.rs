//! Organization settings handlers.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assetdesk_entity::settings::OrgSettings;

use crate::dto::request::SetGeneralManagerRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Organization settings for responses. An unwritten settings row is
/// presented as "nothing designated" rather than `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// The designated general manager, if any.
    pub general_manager_id: Option<Uuid>,
    /// When the settings were last changed, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Option<OrgSettings>> for SettingsResponse {
    fn from(settings: Option<OrgSettings>) -> Self {
        match settings {
            Some(s) => Self {
                general_manager_id: s.general_manager_id,
                updated_at: Some(s.updated_at),
            },
            None => Self {
                general_manager_id: None,
                updated_at: None,
            },
        }
    }
}

/// GET /api/settings/general-manager
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ApiResponse<SettingsResponse>>, ApiError> {
    let settings = state.settings_service.get().await?;
    Ok(Json(ApiResponse::ok(settings.into())))
}

/// PUT /api/settings/general-manager
pub async fn set_general_manager(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<SetGeneralManagerRequest>,
) -> Result<Json<ApiResponse<SettingsResponse>>, ApiError> {
    let settings = state
        .settings_service
        .set_general_manager(&user, req.general_manager_id)
        .await?;
    Ok(Json(ApiResponse::ok(Some(settings).into())))
}
