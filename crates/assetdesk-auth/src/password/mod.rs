//! Password hashing and policy enforcement.

mod hasher;
mod validator;

pub use hasher::PasswordHasher;
pub use validator::PasswordValidator;
