//! Organization-wide settings.

mod service;

pub use service::SettingsService;
