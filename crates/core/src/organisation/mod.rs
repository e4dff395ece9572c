//! Organisation profile service
//!
//! The organisation profile is a singleton row: absent until the first save,
//! updated in place afterwards.

pub mod ports;
pub mod service;

pub use service::OrganisationService;
