//! Device entity.

pub mod model;

pub use model::{AssignDevice, CreateDevice, Device, UpdateDevice};
