//! Organisation profile types
//!
//! At most one organisation profile row exists per organisation. It is
//! created on first save and updated in place afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The singleton organisation profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganisationProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub logo_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable organisation fields, used for both insert and update.
///
/// Identifier and timestamps are assigned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganisationDraft {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub logo_url: String,
}

impl From<&OrganisationProfile> for OrganisationDraft {
    fn from(profile: &OrganisationProfile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            website: profile.website.clone(),
            logo_url: profile.logo_url.clone(),
        }
    }
}
