//! Gateway-specific error types
//!
//! Classifies user-lifecycle failures by the operation that produced them.
//! Every error is caught at the operation boundary, logged, and surfaced as
//! a single notification; none propagate past the returned outcome.

use thiserror::Error;

/// User action gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Account creation failed; carries the provisioning endpoint's message.
    #[error("Account provisioning failed: {0}")]
    Provisioning(String),

    /// Profile field write failed.
    #[error("Profile update failed: {0}")]
    Update(String),

    /// Profile deletion failed.
    #[error("Profile deletion failed: {0}")]
    Delete(String),

    /// Partial success: the account exists but the follow-up profile write
    /// failed, leaving it without its submitted attributes.
    #[error("Account {account_id} provisioned but profile update failed: {message}")]
    Propagation { account_id: String, message: String },

    /// Profile listing failed.
    #[error("Profile fetch failed: {0}")]
    Fetch(String),
}

impl GatewayError {
    /// Description for the user-facing error notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Provisioning(message) | Self::Update(message) => message.clone(),
            Self::Delete(_) => "Failed to delete user".to_string(),
            Self::Propagation { account_id, .. } => format!(
                "Account {account_id} was created but its profile could not be fully populated"
            ),
            Self::Fetch(_) => "Failed to load users".to_string(),
        }
    }
}
