//! User profile types
//!
//! Profile rows live in the remote profile store; the identifier is assigned
//! by the store on account creation and is the sole key for updates and
//! deletes.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Inactive => write!(f, "Inactive"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// Access tier granted to a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    #[default]
    User,
    Manager,
    Admin,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Manager => write!(f, "Manager"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

/// User profile row as stored in the remote profile store.
///
/// The learning metrics are derived by the backend and never written from
/// this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub username: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<String>,
    pub status: UserStatus,
    pub access_level: AccessLevel,
    pub bio: Option<String>,
    pub employee_id: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub total_learning_hours: f64,
    #[serde(default)]
    pub courses_completed: u32,
    #[serde(default)]
    pub compliance_score: f64,
}

/// Payload for creating a new user.
///
/// Same shape as the mutable part of [`UserProfile`], plus the password the
/// provisioning endpoint needs. There is no identifier and there are no
/// metrics; both are owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub full_name: String,
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub access_level: AccessLevel,
    pub bio: Option<String>,
    pub employee_id: Option<String>,
}

/// Partial field set merged into an existing profile row.
///
/// Only populated fields are serialized, so the wire payload carries exactly
/// the fields being changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfilePatch {
    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.location.is_none()
            && self.location_id.is_none()
            && self.status.is_none()
            && self.access_level.is_none()
            && self.bio.is_none()
            && self.employee_id.is_none()
            && self.avatar_url.is_none()
    }
}

impl From<&NewUser> for ProfilePatch {
    /// The propagation payload sent right after provisioning.
    ///
    /// Email and password are excluded: the provisioning endpoint already
    /// stored both with the account itself.
    fn from(new_user: &NewUser) -> Self {
        Self {
            full_name: Some(new_user.full_name.clone()),
            username: new_user.username.clone(),
            phone: new_user.phone.clone(),
            role: new_user.role.clone(),
            department: new_user.department.clone(),
            location: new_user.location.clone(),
            location_id: new_user.location_id.clone(),
            status: Some(new_user.status),
            access_level: Some(new_user.access_level),
            bio: new_user.bio.clone(),
            employee_id: new_user.employee_id.clone(),
            ..Self::default()
        }
    }
}
