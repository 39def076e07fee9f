//! Organization-wide settings singleton.

pub mod model;

pub use model::OrgSettings;
