//! Wire types for the provisioning endpoint

use serde::Deserialize;

/// Successful provisioning response body.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateUserResponse {
    pub user: ProvisionedUser,
}

/// The account object inside a successful response.
#[derive(Debug, Deserialize)]
pub(crate) struct ProvisionedUser {
    pub id: String,
}

/// Failure response body; `error` carries the human-readable reason.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}
