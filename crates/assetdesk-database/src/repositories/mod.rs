//! Concrete repository implementations, one per entity.

pub mod account;
pub mod department;
pub mod device;
pub mod division;
pub mod employee;
pub mod hierarchy;
pub mod phone;
pub mod settings;
