//! HTTP client for the account provisioning endpoint
//!
//! The provisioning endpoint creates the account itself (identity +
//! credentials) and assigns the identifier; profile attributes are written
//! separately through the profile store.

use std::time::Duration;

use async_trait::async_trait;
use cohort_core::{AccountProvisioner, ProvisionedAccount};
use cohort_domain::constants::{CREATE_USER_FUNCTION, FUNCTIONS_PATH};
use cohort_domain::{BackendConfig, CohortError, NewUser, Result};
use reqwest::{Method, StatusCode};
use tracing::{info, warn};

use super::types::{CreateUserResponse, ErrorBody};
use crate::http::HttpClient;

/// Shown when a failure response carries no usable error message.
const FALLBACK_ERROR_MESSAGE: &str = "Failed to create user";

/// Client for the hosted create-user function.
#[derive(Debug)]
pub struct ProvisioningClient {
    http_client: HttpClient,
    endpoint: String,
    api_key: String,
}

impl ProvisioningClient {
    /// Create a new provisioning client.
    ///
    /// # Errors
    /// Returns `CohortError::Config` if the backend URL is malformed or the
    /// HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|_| CohortError::Config(format!("invalid backend URL: {}", config.base_url)))?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let endpoint = format!(
            "{}/{}/{}",
            config.base_url.trim_end_matches('/'),
            FUNCTIONS_PATH,
            CREATE_USER_FUNCTION
        );

        Ok(Self { http_client, endpoint, api_key: config.api_key.clone() })
    }
}

#[async_trait]
impl AccountProvisioner for ProvisioningClient {
    async fn provision(&self, new_user: &NewUser) -> Result<ProvisionedAccount> {
        let request = self
            .http_client
            .request(Method::POST, &self.endpoint)
            .bearer_auth(&self.api_key)
            .json(new_user);

        let response = self.http_client.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            // The failure body carries the reason shown to the user.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            warn!(%status, reason = %message, "account provisioning rejected");

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CohortError::Auth(message),
                status if status.is_client_error() => CohortError::InvalidInput(message),
                _ => CohortError::Network(message),
            });
        }

        let body: CreateUserResponse = response.json().await.map_err(|err| {
            CohortError::Internal(format!("malformed provisioning response: {err}"))
        })?;

        info!(account_id = %body.user.id, "account provisioned");
        Ok(ProvisionedAccount { id: body.user.id })
    }
}
