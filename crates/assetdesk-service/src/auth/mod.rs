//! Login and session handling.

mod service;

pub use service::{AccountStore, AuthService, LoginOutcome};
