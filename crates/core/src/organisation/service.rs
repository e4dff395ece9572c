//! Organisation profile service - core business logic

use std::sync::Arc;

use cohort_domain::{Notification, OrganisationDraft, OrganisationProfile};
use tracing::{error, info};

use super::ports::OrganisationStore;
use crate::interaction_ports::Notifier;

/// Service for loading and saving the singleton organisation profile.
pub struct OrganisationService {
    store: Arc<dyn OrganisationStore>,
    notifier: Arc<dyn Notifier>,
}

impl OrganisationService {
    /// Create a new organisation profile service.
    pub fn new(store: Arc<dyn OrganisationStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Load the organisation profile.
    ///
    /// An absent row is a normal state (profile not created yet) and yields
    /// `None` without an error; only transport failures are reported.
    pub async fn load(&self) -> Option<OrganisationProfile> {
        match self.store.fetch().await {
            Ok(profile) => profile,
            Err(err) => {
                error!(error = %err, "organisation profile fetch failed");
                self.notifier
                    .notify(Notification::error("Error", "Failed to load organisation profile"));
                None
            }
        }
    }

    /// Save the organisation profile: insert on first save, update after.
    ///
    /// Returns the row id on success so first-time callers learn the
    /// identifier the backend assigned.
    pub async fn save(&self, existing_id: Option<&str>, draft: OrganisationDraft) -> Option<String> {
        let result = match existing_id {
            Some(id) => self.store.update(id, &draft).await.map(|()| id.to_string()),
            None => self.store.insert(&draft).await.map(|profile| profile.id),
        };

        match result {
            Ok(id) => {
                info!(organisation_id = %id, "organisation profile saved");
                self.notifier.notify(Notification::success(
                    "Success",
                    "Organisation profile updated successfully",
                ));
                Some(id)
            }
            Err(err) => {
                error!(error = %err, "organisation profile save failed");
                self.notifier
                    .notify(Notification::error("Error", "Failed to save organisation profile"));
                None
            }
        }
    }
}
