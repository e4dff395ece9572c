//! Port interfaces for the organisation profile

use async_trait::async_trait;
use cohort_domain::{OrganisationDraft, OrganisationProfile, Result};

/// Trait for organisation profile persistence.
#[async_trait]
pub trait OrganisationStore: Send + Sync {
    /// Fetch the singleton row. `Ok(None)` means it has not been created yet.
    async fn fetch(&self) -> Result<Option<OrganisationProfile>>;

    /// Insert the first organisation row and return it as stored.
    async fn insert(&self, draft: &OrganisationDraft) -> Result<OrganisationProfile>;

    /// Update the existing row identified by `id`.
    async fn update(&self, id: &str, draft: &OrganisationDraft) -> Result<()>;
}
