//! Management division operations.

mod service;

pub use service::DivisionService;
