//! User interaction ports
//!
//! Outcome notifications and the destructive-action confirmation prompt are
//! both owned by the embedding application; the services only speak to these
//! traits.

use async_trait::async_trait;
use cohort_domain::{Notification, Result};

/// Sink for user-facing outcome notifications.
///
/// Every gateway operation emits exactly one notification per visible
/// outcome; implementations decide how (or whether) to display it.
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the user.
    fn notify(&self, notification: Notification);
}

/// Blocking yes/no confirmation for destructive actions.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Ask the user to confirm. `Ok(false)` means declined.
    async fn confirm(&self, message: &str) -> Result<bool>;
}
