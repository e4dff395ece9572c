//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the gateway ports, enabling deterministic
//! unit tests without network dependencies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cohort_core::{
    AccountProvisioner, ConfirmationPrompt, Notifier, OrganisationStore, ProfileStore,
    ProvisionedAccount,
};
use cohort_domain::{
    CohortError, NewUser, Notification, OrganisationDraft, OrganisationProfile, ProfilePatch,
    Result as DomainResult, UserProfile,
};

/// In-memory mock for `AccountProvisioner`.
///
/// Either hands out the configured identifier or fails with the configured
/// error, and records every payload it saw.
#[derive(Clone)]
pub struct MockProvisioner {
    outcome: Arc<Mutex<DomainResult<String>>>,
    seen: Arc<Mutex<Vec<NewUser>>>,
}

impl MockProvisioner {
    /// Mock that provisions successfully with the given account id.
    pub fn succeeding(id: &str) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(id.to_string()))),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that fails every provisioning call.
    pub fn failing(err: CohortError) -> Self {
        Self { outcome: Arc::new(Mutex::new(Err(err))), seen: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Payloads received so far.
    pub fn seen(&self) -> Vec<NewUser> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountProvisioner for MockProvisioner {
    async fn provision(&self, new_user: &NewUser) -> DomainResult<ProvisionedAccount> {
        self.seen.lock().unwrap().push(new_user.clone());
        self.outcome
            .lock()
            .unwrap()
            .clone()
            .map(|id| ProvisionedAccount { id })
    }
}

/// In-memory mock for `ProfileStore`.
///
/// Records update/delete calls and can be configured to fail any operation.
#[derive(Default, Clone)]
pub struct MockProfileStore {
    profiles: Arc<Mutex<Vec<UserProfile>>>,
    updates: Arc<Mutex<Vec<(String, ProfilePatch)>>>,
    deletes: Arc<Mutex<Vec<String>>>,
    list_calls: Arc<AtomicUsize>,
    fail_update: Arc<Mutex<Option<CohortError>>>,
    fail_delete: Arc<Mutex<Option<CohortError>>>,
    fail_list: Arc<Mutex<Option<CohortError>>>,
}

impl MockProfileStore {
    /// Create a new mock seeded with the provided profiles.
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles: Arc::new(Mutex::new(profiles)), ..Self::default() }
    }

    /// Make every update fail with the given error.
    pub fn with_failing_update(self, err: CohortError) -> Self {
        *self.fail_update.lock().unwrap() = Some(err);
        self
    }

    /// Make every delete fail with the given error.
    pub fn with_failing_delete(self, err: CohortError) -> Self {
        *self.fail_delete.lock().unwrap() = Some(err);
        self
    }

    /// Make every list fail with the given error.
    pub fn with_failing_list(self, err: CohortError) -> Self {
        *self.fail_list.lock().unwrap() = Some(err);
        self
    }

    /// `(id, patch)` pairs received by `update`.
    pub fn updates(&self) -> Vec<(String, ProfilePatch)> {
        self.updates.lock().unwrap().clone()
    }

    /// Ids received by `delete`.
    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    /// Total number of network-like calls the mock has seen.
    pub fn call_count(&self) -> usize {
        self.updates.lock().unwrap().len()
            + self.deletes.lock().unwrap().len()
            + self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn list(&self) -> DomainResult<Vec<UserProfile>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_list.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn update(&self, id: &str, patch: &ProfilePatch) -> DomainResult<()> {
        self.updates.lock().unwrap().push((id.to_string(), patch.clone()));
        if let Some(err) = self.fail_update.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.deletes.lock().unwrap().push(id.to_string());
        if let Some(err) = self.fail_delete.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

/// In-memory mock for `OrganisationStore`.
#[derive(Default, Clone)]
pub struct MockOrganisationStore {
    stored: Arc<Mutex<Option<OrganisationProfile>>>,
    inserts: Arc<Mutex<Vec<OrganisationDraft>>>,
    updates: Arc<Mutex<Vec<(String, OrganisationDraft)>>>,
    fail: Arc<Mutex<Option<CohortError>>>,
}

impl MockOrganisationStore {
    /// Mock with an existing stored row.
    pub fn with_profile(profile: OrganisationProfile) -> Self {
        Self { stored: Arc::new(Mutex::new(Some(profile))), ..Self::default() }
    }

    /// Make every operation fail with the given error.
    pub fn with_failure(self, err: CohortError) -> Self {
        *self.fail.lock().unwrap() = Some(err);
        self
    }

    /// Drafts received by `insert`.
    pub fn inserts(&self) -> Vec<OrganisationDraft> {
        self.inserts.lock().unwrap().clone()
    }

    /// `(id, draft)` pairs received by `update`.
    pub fn updates(&self) -> Vec<(String, OrganisationDraft)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrganisationStore for MockOrganisationStore {
    async fn fetch(&self) -> DomainResult<Option<OrganisationProfile>> {
        if let Some(err) = self.fail.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn insert(&self, draft: &OrganisationDraft) -> DomainResult<OrganisationProfile> {
        self.inserts.lock().unwrap().push(draft.clone());
        if let Some(err) = self.fail.lock().unwrap().clone() {
            return Err(err);
        }
        let profile = OrganisationProfile {
            id: "org-1".to_string(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            website: draft.website.clone(),
            logo_url: draft.logo_url.clone(),
            created_at: None,
            updated_at: None,
        };
        *self.stored.lock().unwrap() = Some(profile.clone());
        Ok(profile)
    }

    async fn update(&self, id: &str, draft: &OrganisationDraft) -> DomainResult<()> {
        self.updates.lock().unwrap().push((id.to_string(), draft.clone()));
        if let Some(err) = self.fail.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

/// Notifier that records every notification it receives.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Notifications received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Prompt that answers every confirmation with a fixed response.
#[derive(Clone)]
pub struct ScriptedPrompt {
    answer: DomainResult<bool>,
    asked: Arc<AtomicUsize>,
}

impl ScriptedPrompt {
    /// Prompt that accepts every confirmation.
    pub fn accepting() -> Self {
        Self { answer: Ok(true), asked: Arc::new(AtomicUsize::new(0)) }
    }

    /// Prompt that declines every confirmation.
    pub fn declining() -> Self {
        Self { answer: Ok(false), asked: Arc::new(AtomicUsize::new(0)) }
    }

    /// Prompt that fails with the given error.
    pub fn failing(err: CohortError) -> Self {
        Self { answer: Err(err), asked: Arc::new(AtomicUsize::new(0)) }
    }

    /// Number of confirmations requested.
    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedPrompt {
    async fn confirm(&self, _message: &str) -> DomainResult<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}
