//! Management division entity.

pub mod model;

pub use model::{CreateDivision, Division, UpdateDivision};
