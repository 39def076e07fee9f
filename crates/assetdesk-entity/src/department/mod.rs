//! Department entity.

pub mod model;

pub use model::{CreateDepartment, Department, UpdateDepartment};
