//! User action gateway
//!
//! Translates UI-level intents (create/update/delete user) into calls
//! against the remote profile store and the account provisioning endpoint,
//! and reports every outcome through the notifier.

pub mod error;
pub mod ports;
pub mod service;

pub use error::GatewayError;
pub use service::UserAdminService;
