//! HTTP request handlers, one module per domain.

pub mod account;
pub mod approver;
pub mod auth;
pub mod department;
pub mod device;
pub mod division;
pub mod employee;
pub mod health;
pub mod phone;
pub mod settings;
