//! Wire types for the profile store REST resource

use serde::Deserialize;

/// REST error body; `message` carries the store's rejection reason.
#[derive(Debug, Deserialize)]
pub(crate) struct RestErrorBody {
    pub message: Option<String>,
}
