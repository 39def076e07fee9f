//! Route definitions for the AssetDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(approver_routes())
        .merge(employee_routes())
        .merge(department_routes())
        .merge(division_routes())
        .merge(device_routes())
        .merge(phone_routes())
        .merge(account_routes())
        .merge(settings_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Auth endpoints: login, logout, session introspection
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Approving-manager resolution
fn approver_routes() -> Router<AppState> {
    Router::new().route("/approvers/resolve", get(handlers::approver::resolve))
}

/// Employee CRUD and per-employee asset listings
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(handlers::employee::list))
        .route("/employees", post(handlers::employee::create))
        .route("/employees/{id}", get(handlers::employee::get))
        .route("/employees/{id}", put(handlers::employee::update))
        .route("/employees/{id}", delete(handlers::employee::delete))
        .route(
            "/employees/{id}/devices",
            get(handlers::employee::list_devices),
        )
        .route(
            "/employees/{id}/phone-lines",
            get(handlers::employee::list_phone_lines),
        )
}

/// Department CRUD and membership
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(handlers::department::list))
        .route("/departments", post(handlers::department::create))
        .route("/departments/{id}", get(handlers::department::get))
        .route("/departments/{id}", put(handlers::department::update))
        .route("/departments/{id}", delete(handlers::department::delete))
        .route(
            "/departments/{id}/employees",
            get(handlers::department::list_employees),
        )
}

/// Division CRUD and manager designation
fn division_routes() -> Router<AppState> {
    Router::new()
        .route("/divisions", get(handlers::division::list))
        .route("/divisions", post(handlers::division::create))
        .route("/divisions/{id}", get(handlers::division::get))
        .route("/divisions/{id}", put(handlers::division::update))
        .route("/divisions/{id}", delete(handlers::division::delete))
        .route(
            "/divisions/{id}/manager",
            put(handlers::division::set_manager),
        )
}

/// Device CRUD and assignment
fn device_routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(handlers::device::list))
        .route("/devices", post(handlers::device::create))
        .route("/devices/{id}", get(handlers::device::get))
        .route("/devices/{id}", put(handlers::device::update))
        .route("/devices/{id}", delete(handlers::device::delete))
        .route("/devices/{id}/assignment", put(handlers::device::assign))
}

/// Phone line CRUD and assignment
fn phone_routes() -> Router<AppState> {
    Router::new()
        .route("/phone-lines", get(handlers::phone::list))
        .route("/phone-lines", post(handlers::phone::create))
        .route("/phone-lines/{id}", get(handlers::phone::get))
        .route("/phone-lines/{id}", put(handlers::phone::update))
        .route("/phone-lines/{id}", delete(handlers::phone::delete))
        .route("/phone-lines/{id}/assignment", put(handlers::phone::assign))
}

/// Login account management (admin)
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(handlers::account::list))
        .route("/accounts", post(handlers::account::create))
        .route("/accounts/{id}", get(handlers::account::get))
        .route("/accounts/{id}", delete(handlers::account::delete))
        .route(
            "/accounts/{id}/password",
            put(handlers::account::reset_password),
        )
}

/// Organization settings
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/settings/general-manager", get(handlers::settings::get))
        .route(
            "/settings/general-manager",
            put(handlers::settings::set_general_manager),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
