//! Phone line entity.

pub mod model;

pub use model::{AssignPhoneLine, CreatePhoneLine, PhoneLine, UpdatePhoneLine};
