//! Domain types and models

pub mod notification;
pub mod organisation;
pub mod permissions;
pub mod user;

// Re-export the main types for convenience
pub use notification::{Notification, Severity};
pub use organisation::{OrganisationDraft, OrganisationProfile};
pub use permissions::Permissions;
pub use user::{AccessLevel, NewUser, ProfilePatch, UserProfile, UserStatus};
