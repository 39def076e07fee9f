//! # assetdesk-api
//!
//! HTTP API layer for AssetDesk built on Axum.
//!
//! Provides all REST endpoints, the session-cookie extractor, DTOs,
//! and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
