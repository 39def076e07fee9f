//! Auth handlers — login, logout, session introspection.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use assetdesk_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionClaimsResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Builds the session cookie with the contract the frontend expects:
/// HttpOnly, whole-application path, Secure only in production.
fn session_cookie(state: &AppState, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(state.config.auth.cookie_name.clone(), value);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(state.config.server.is_production());
    cookie.set_max_age(time::Duration::days(
        state.config.auth.session_ttl_days as i64,
    ));
    cookie
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.username, &req.password).await?;

    let jar = jar.add(session_cookie(&state, outcome.session.token));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            account: outcome.account.into(),
            session_expires_at: outcome.session.expires_at,
        })),
    ))
}

/// POST /api/auth/logout
///
/// Clears the client-side cookie. The token itself stays
/// cryptographically valid until its natural expiry; there is no
/// server-side session state to invalidate.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let mut removal = Cookie::from(state.config.auth.cookie_name.clone());
    removal.set_path("/");
    let jar = jar.remove(removal);

    (
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

/// GET /api/auth/session
///
/// Introspects the current session. A missing or invalid cookie is
/// reported as `null`, not as an error — "no session" is a valid
/// answer here.
pub async fn session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<ApiResponse<Option<SessionClaimsResponse>>> {
    let claims = jar
        .get(&state.config.auth.cookie_name)
        .and_then(|cookie| state.auth_service.decode_session(cookie.value()).ok());

    Json(ApiResponse::ok(claims.map(SessionClaimsResponse::from)))
}
