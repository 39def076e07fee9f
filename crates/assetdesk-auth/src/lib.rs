//! # assetdesk-auth
//!
//! Password hashing and stateless session tokens for AssetDesk.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and policy enforcement
//! - `token` — Signed session token issuance and validation

pub mod password;
pub mod token;

pub use password::{PasswordHasher, PasswordValidator};
pub use token::{Claims, SessionCodec, SessionToken};
