//! Department operations.

mod service;

pub use service::DepartmentService;
