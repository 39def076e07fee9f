//! # assetdesk-service
//!
//! Business logic services for AssetDesk. Each service orchestrates
//! repositories and auth primitives; HTTP concerns stay out of this
//! crate.
//!
//! ## Modules
//!
//! - `auth` — login flow and session decoding
//! - `hierarchy` — approving-manager resolution over the org graph
//! - `account` — administrator management of login accounts
//! - `employee`, `department`, `division` — org structure CRUD
//! - `device`, `phone` — asset CRUD and assignment
//! - `settings` — organization-wide settings

pub mod account;
pub mod auth;
pub mod context;
pub mod department;
pub mod device;
pub mod division;
pub mod employee;
pub mod hierarchy;
pub mod phone;
pub mod settings;

pub use context::RequestContext;
