//! Configuration structures
//!
//! Pure data; loading from the environment or files lives in the infra
//! crate.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::Permissions;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (e.g. "https://org.example.com")
    pub base_url: String,
    /// API key sent as both the `apikey` header and the bearer token
    pub api_key: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
