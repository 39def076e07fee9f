//! Employee directory operations.

mod lookup;
mod service;

pub use lookup::EmployeeLookup;
pub use service::EmployeeService;
