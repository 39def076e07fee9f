//! # assetdesk-entity
//!
//! Domain entity models for AssetDesk. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod account;
pub mod department;
pub mod device;
pub mod division;
pub mod employee;
pub mod phone;
pub mod settings;
