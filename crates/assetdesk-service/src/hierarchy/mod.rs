//! Approving-manager resolution over the organizational graph.

mod directory;
mod resolver;
mod service;

pub use directory::OrgDirectory;
pub use resolver::{ApproverTarget, resolve_manager};
pub use service::HierarchyService;
