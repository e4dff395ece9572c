//! Sample domain values for gateway tests.

use cohort_domain::{AccessLevel, NewUser, OrganisationDraft, UserProfile, UserStatus};

/// A valid creation payload.
pub fn sample_new_user() -> NewUser {
    NewUser {
        full_name: "Jane Doe".to_string(),
        username: Some("jdoe".to_string()),
        email: "jane@x.com".to_string(),
        password: "secret".to_string(),
        phone: None,
        role: Some("Analyst".to_string()),
        department: Some("Sales".to_string()),
        location: None,
        location_id: None,
        status: UserStatus::Active,
        access_level: AccessLevel::User,
        bio: None,
        employee_id: None,
    }
}

/// A stored profile row as the backend would return it.
pub fn sample_profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        full_name: "Jane Doe".to_string(),
        username: Some("jdoe".to_string()),
        email: "jane@x.com".to_string(),
        phone: None,
        role: Some("Analyst".to_string()),
        department: Some("Sales".to_string()),
        location: None,
        location_id: None,
        status: UserStatus::Active,
        access_level: AccessLevel::User,
        bio: None,
        employee_id: None,
        avatar_url: None,
        total_learning_hours: 12.5,
        courses_completed: 3,
        compliance_score: 0.9,
    }
}

/// An organisation draft with every field filled in.
pub fn sample_org_draft() -> OrganisationDraft {
    OrganisationDraft {
        name: "Acme Corp".to_string(),
        description: "Widgets".to_string(),
        email: "hello@acme.test".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
        website: "https://acme.test".to_string(),
        logo_url: String::new(),
    }
}
