//! # assetdesk-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all AssetDesk entities, plus the transactional
//! organizational snapshot used by approver resolution.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
