//! Port interfaces for user administration
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for user lifecycle operations.

use async_trait::async_trait;
use cohort_domain::{NewUser, ProfilePatch, Result, UserProfile};

/// An account created by the provisioning endpoint.
///
/// Only the identifier matters to the gateway; everything else about the
/// account lives behind the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedAccount {
    pub id: String,
}

/// Trait for creating accounts (identity + credentials).
///
/// Distinct from the profile row: the provisioning endpoint establishes the
/// account and assigns the identifier, after which profile attributes are
/// written separately.
#[async_trait]
pub trait AccountProvisioner: Send + Sync {
    /// Create a new account for the given user payload.
    async fn provision(&self, new_user: &NewUser) -> Result<ProvisionedAccount>;
}

/// Trait for profile row persistence in the remote profile store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch all profile rows.
    async fn list(&self) -> Result<Vec<UserProfile>>;

    /// Merge a partial field set into the profile identified by `id`.
    async fn update(&self, id: &str, patch: &ProfilePatch) -> Result<()>;

    /// Delete the profile identified by `id`.
    async fn delete(&self, id: &str) -> Result<()>;
}
