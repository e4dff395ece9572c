//! User action gateway - core business logic

use std::sync::Arc;

use cohort_domain::{NewUser, Notification, Permissions, ProfilePatch, UserProfile};
use tracing::{debug, error, info, warn};

use super::error::GatewayError;
use super::ports::{AccountProvisioner, ProfileStore};
use crate::interaction_ports::{ConfirmationPrompt, Notifier};

/// Confirmation shown before a user row is deleted.
pub const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this user? This action cannot be undone.";

/// Gateway for user lifecycle operations.
///
/// Each operation performs its remote calls, emits the outcome notification,
/// and reports the outcome as a boolean. Errors never escape an operation;
/// retrying is always the caller's (user's) decision.
pub struct UserAdminService {
    provisioner: Arc<dyn AccountProvisioner>,
    store: Arc<dyn ProfileStore>,
    notifier: Arc<dyn Notifier>,
    prompt: Arc<dyn ConfirmationPrompt>,
    permissions: Permissions,
}

impl UserAdminService {
    /// Create a new gateway with all permissions granted.
    pub fn new(
        provisioner: Arc<dyn AccountProvisioner>,
        store: Arc<dyn ProfileStore>,
        notifier: Arc<dyn Notifier>,
        prompt: Arc<dyn ConfirmationPrompt>,
    ) -> Self {
        Self { provisioner, store, notifier, prompt, permissions: Permissions::default() }
    }

    /// Restrict the gateway to the given permission flags.
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Create a new user: provision the account, then populate its profile.
    ///
    /// Not idempotent; repeated calls produce multiple accounts. If the
    /// profile write fails after provisioning succeeded, the account is left
    /// in place and the distinct propagation notification is emitted so the
    /// operator can finish setup by editing the user.
    pub async fn create_user(&self, new_user: NewUser) -> bool {
        if !self.permissions.can_create_users {
            debug!(email = %new_user.email, "user creation denied by permissions");
            return false;
        }

        match self.try_create_user(&new_user).await {
            Ok(account_id) => {
                info!(%account_id, "user created");
                self.notifier.notify(Notification::success("Success", "User created successfully"));
                true
            }
            Err(err) => {
                error!(error = %err, "user creation failed");
                self.notifier.notify(Notification::error("Error", err.user_message()));
                false
            }
        }
    }

    async fn try_create_user(&self, new_user: &NewUser) -> Result<String, GatewayError> {
        let account = self
            .provisioner
            .provision(new_user)
            .await
            .map_err(|err| GatewayError::Provisioning(err.message().to_string()))?;

        // The provisioning endpoint only establishes identity + credentials;
        // every other submitted attribute goes through the profile store.
        let patch = ProfilePatch::from(new_user);
        self.store.update(&account.id, &patch).await.map_err(|err| {
            GatewayError::Propagation {
                account_id: account.id.clone(),
                message: err.message().to_string(),
            }
        })?;

        if let Some(department) = &new_user.department {
            // Department/role combinations are assigned elsewhere; record the
            // intent until that wiring exists.
            info!(account_id = %account.id, %department, "department assignment pending");
        }

        Ok(account.id)
    }

    /// Apply a partial field set to an existing profile.
    ///
    /// An empty patch is a no-op that still reports success. Field values are
    /// not validated here; the store accepts or rejects them.
    pub async fn save_user(&self, id: &str, patch: ProfilePatch) -> bool {
        if !self.permissions.can_edit_users {
            debug!(user_id = %id, "user update denied by permissions");
            return false;
        }

        if patch.is_empty() {
            debug!(user_id = %id, "empty patch, nothing to apply");
            self.notifier.notify(Notification::success("Success", "User updated successfully"));
            return true;
        }

        match self.store.update(id, &patch).await {
            Ok(()) => {
                info!(user_id = %id, "user updated");
                self.notifier.notify(Notification::success("Success", "User updated successfully"));
                true
            }
            Err(err) => {
                let err = GatewayError::Update(err.message().to_string());
                error!(user_id = %id, error = %err, "user update failed");
                self.notifier.notify(Notification::error("Error", err.user_message()));
                false
            }
        }
    }

    /// Delete a user after interactive confirmation.
    ///
    /// Declining the confirmation aborts with no network call, no error, and
    /// no notification.
    pub async fn delete_user(&self, id: &str) -> bool {
        if !self.permissions.can_delete_users {
            debug!(user_id = %id, "user deletion denied by permissions");
            return false;
        }

        let confirmed = match self.prompt.confirm(DELETE_CONFIRM_MESSAGE).await {
            Ok(confirmed) => confirmed,
            Err(err) => {
                // An unanswerable prompt must never translate into a delete.
                warn!(user_id = %id, error = %err, "confirmation prompt failed, treating as declined");
                false
            }
        };
        if !confirmed {
            debug!(user_id = %id, "user deletion cancelled");
            return false;
        }

        match self.store.delete(id).await {
            Ok(()) => {
                info!(user_id = %id, "user deleted");
                self.notifier.notify(Notification::success("Success", "User deleted successfully"));
                true
            }
            Err(err) => {
                let err = GatewayError::Delete(err.message().to_string());
                error!(user_id = %id, error = %err, "user deletion failed");
                self.notifier.notify(Notification::error("Error", err.user_message()));
                false
            }
        }
    }

    /// Fetch all user profiles for display.
    ///
    /// A fetch failure is reported through the notifier and yields `None`.
    pub async fn list_users(&self) -> Option<Vec<UserProfile>> {
        match self.store.list().await {
            Ok(profiles) => Some(profiles),
            Err(err) => {
                let err = GatewayError::Fetch(err.message().to_string());
                error!(error = %err, "user listing failed");
                self.notifier.notify(Notification::error("Error", err.user_message()));
                None
            }
        }
    }
}
