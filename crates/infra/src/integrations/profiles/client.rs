//! REST client for the remote profile store
//!
//! Implements both profile-row persistence and the singleton organisation
//! profile against the hosted table resource. Rows are keyed by the
//! store-assigned identifier; the API key is sent as both the `apikey`
//! header and the bearer token, as the backend expects.

use std::time::Duration;

use async_trait::async_trait;
use cohort_core::{OrganisationStore, ProfileStore};
use cohort_domain::constants::{
    API_KEY_HEADER, ORGANISATION_PROFILE_TABLE, PREFER_HEADER, PREFER_MINIMAL,
    PREFER_REPRESENTATION, PROFILES_TABLE, REST_PATH,
};
use cohort_domain::{
    BackendConfig, CohortError, OrganisationDraft, OrganisationProfile, ProfilePatch, Result,
    UserProfile,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, Response};
use tracing::{debug, warn};

use super::types::RestErrorBody;
use crate::http::HttpClient;

/// Client for the hosted table REST resource.
pub struct ProfileStoreClient {
    http_client: HttpClient,
    base_url: String,
}

impl ProfileStoreClient {
    /// Create a new profile store client.
    ///
    /// # Errors
    /// Returns `CohortError::Config` if the backend URL or API key is
    /// malformed, or the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|_| CohortError::Config(format!("invalid backend URL: {}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| CohortError::Config("API key contains invalid characters".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| CohortError::Config("API key contains invalid characters".into()))?;
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { http_client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, table)
    }

    /// Map a non-success response into a domain error, preferring the
    /// store's own rejection message.
    async fn rejection(response: Response) -> CohortError {
        let status = response.status();
        let message = response
            .json::<RestErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown status")
                )
            });
        warn!(%status, reason = %message, "profile store rejected request");

        match status.as_u16() {
            401 | 403 => CohortError::Auth(message),
            404 => CohortError::NotFound(message),
            400..=499 => CohortError::InvalidInput(message),
            _ => CohortError::Network(message),
        }
    }
}

#[async_trait]
impl ProfileStore for ProfileStoreClient {
    async fn list(&self) -> Result<Vec<UserProfile>> {
        let request = self
            .http_client
            .request(Method::GET, self.table_url(PROFILES_TABLE))
            .query(&[("select", "*")]);

        let response = self.http_client.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let profiles: Vec<UserProfile> = response
            .json()
            .await
            .map_err(|err| CohortError::Internal(format!("malformed profile rows: {err}")))?;
        debug!(count = profiles.len(), "fetched profile rows");
        Ok(profiles)
    }

    async fn update(&self, id: &str, patch: &ProfilePatch) -> Result<()> {
        let request = self
            .http_client
            .request(Method::PATCH, self.table_url(PROFILES_TABLE))
            .query(&[("id", format!("eq.{id}"))])
            .header(PREFER_HEADER, PREFER_MINIMAL)
            .json(patch);

        let response = self.http_client.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        debug!(user_id = %id, "profile row updated");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let request = self
            .http_client
            .request(Method::DELETE, self.table_url(PROFILES_TABLE))
            .query(&[("id", format!("eq.{id}"))]);

        let response = self.http_client.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        debug!(user_id = %id, "profile row deleted");
        Ok(())
    }
}

#[async_trait]
impl OrganisationStore for ProfileStoreClient {
    async fn fetch(&self) -> Result<Option<OrganisationProfile>> {
        let request = self
            .http_client
            .request(Method::GET, self.table_url(ORGANISATION_PROFILE_TABLE))
            .query(&[("select", "*"), ("limit", "1")]);

        let response = self.http_client.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        // An empty result set means the singleton has not been created yet.
        let mut rows: Vec<OrganisationProfile> = response
            .json()
            .await
            .map_err(|err| CohortError::Internal(format!("malformed organisation row: {err}")))?;
        Ok(if rows.is_empty() { None } else { Some(rows.remove(0)) })
    }

    async fn insert(&self, draft: &OrganisationDraft) -> Result<OrganisationProfile> {
        let request = self
            .http_client
            .request(Method::POST, self.table_url(ORGANISATION_PROFILE_TABLE))
            .header(PREFER_HEADER, PREFER_REPRESENTATION)
            .json(draft);

        let response = self.http_client.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let mut rows: Vec<OrganisationProfile> = response
            .json()
            .await
            .map_err(|err| CohortError::Internal(format!("malformed organisation row: {err}")))?;
        if rows.is_empty() {
            return Err(CohortError::Internal(
                "organisation insert returned no representation".into(),
            ));
        }
        Ok(rows.remove(0))
    }

    async fn update(&self, id: &str, draft: &OrganisationDraft) -> Result<()> {
        let request = self
            .http_client
            .request(Method::PATCH, self.table_url(ORGANISATION_PROFILE_TABLE))
            .query(&[("id", format!("eq.{id}"))])
            .header(PREFER_HEADER, PREFER_MINIMAL)
            .json(draft);

        let response = self.http_client.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        debug!(organisation_id = %id, "organisation row updated");
        Ok(())
    }
}
