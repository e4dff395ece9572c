//! Confirmation prompt implementations

use async_trait::async_trait;
use cohort_core::ConfirmationPrompt;
use cohort_domain::{CohortError, Result};
use inquire::{Confirm, InquireError};

/// Interactive terminal confirmation backed by `inquire`.
///
/// The prompt blocks on the terminal, so it runs on the blocking thread
/// pool. Escaping or interrupting the prompt counts as declining.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

#[async_trait]
impl ConfirmationPrompt for TerminalPrompt {
    async fn confirm(&self, message: &str) -> Result<bool> {
        let message = message.to_string();

        tokio::task::spawn_blocking(move || {
            match Confirm::new(&message).with_default(false).prompt() {
                Ok(confirmed) => Ok(confirmed),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    Ok(false)
                }
                Err(err) => {
                    Err(CohortError::Internal(format!("confirmation prompt failed: {err}")))
                }
            }
        })
        .await
        .map_err(|err| CohortError::Internal(format!("confirmation prompt task failed: {err}")))?
    }
}
