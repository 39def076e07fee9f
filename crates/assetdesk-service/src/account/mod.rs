//! Administrator management of login accounts.

mod service;

pub use service::{AccountService, NewAccount};
