//! Device inventory operations.

mod service;

pub use service::DeviceService;
