//! Phone line operations.

mod service;

pub use service::PhoneLineService;
