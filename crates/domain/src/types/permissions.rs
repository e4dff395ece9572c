//! Admin permission flags
//!
//! Gateway operations are gated on these flags; a denied operation is a
//! silent no-op, matching the UI which hides the affected controls.

use serde::{Deserialize, Serialize};

/// Permission flags for user administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub can_create_users: bool,
    pub can_edit_users: bool,
    pub can_delete_users: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self { can_create_users: true, can_edit_users: true, can_delete_users: true }
    }
}

impl Permissions {
    /// All flags denied; useful for read-only consumers.
    pub fn read_only() -> Self {
        Self { can_create_users: false, can_edit_users: false, can_delete_users: false }
    }
}
