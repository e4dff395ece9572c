//! Notifier implementations
//!
//! The gateway only produces notification values; this crate ships a
//! tracing-backed sink for headless use. Applications with a UI provide
//! their own `Notifier` (toast, status bar) instead.

use cohort_core::Notifier;
use cohort_domain::{Notification, Severity};
use tracing::{error, info};

/// Notifier that emits notifications as structured tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => {
                info!(title = %notification.title, "{}", notification.description);
            }
            Severity::Error => {
                error!(title = %notification.title, "{}", notification.description);
            }
        }
    }
}
