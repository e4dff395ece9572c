//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `COHORT_BACKEND_URL`: Base URL of the hosted backend
//! - `COHORT_API_KEY`: API key for the hosted backend
//! - `COHORT_TIMEOUT_SECS`: Per-request timeout in seconds (optional)
//! - `COHORT_CAN_CREATE_USERS`: Whether user creation is permitted (true/false)
//! - `COHORT_CAN_EDIT_USERS`: Whether user editing is permitted (true/false)
//! - `COHORT_CAN_DELETE_USERS`: Whether user deletion is permitted (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./cohort.json` or `./cohort.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../cohort.json` or `../cohort.toml` (parent directory)

use std::path::{Path, PathBuf};

use cohort_domain::constants::DEFAULT_TIMEOUT_SECS;
use cohort_domain::{BackendConfig, CohortError, Config, Permissions, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "cohort.json", "cohort.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `CohortError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `CohortError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("COHORT_BACKEND_URL")?;
    let api_key = env_var("COHORT_API_KEY")?;
    let timeout_secs = match std::env::var("COHORT_TIMEOUT_SECS") {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| CohortError::Config(format!("Invalid timeout: {}", e)))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let permissions = Permissions {
        can_create_users: env_bool("COHORT_CAN_CREATE_USERS", true),
        can_edit_users: env_bool("COHORT_CAN_EDIT_USERS", true),
        can_delete_users: env_bool("COHORT_CAN_DELETE_USERS", true),
    };

    Ok(Config { backend: BackendConfig { base_url, api_key, timeout_secs }, permissions })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the default locations listed in the module
/// documentation.
///
/// # Errors
/// Returns `CohortError::Config` if no file is found or the contents are
/// invalid.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            CohortError::Config("no configuration file found in probed locations".into())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        CohortError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str::<Config>(&contents)
            .map_err(|e| CohortError::Config(format!("invalid JSON config: {}", e)))?,
        Some("toml") => toml::from_str::<Config>(&contents)
            .map_err(|e| CohortError::Config(format!("invalid TOML config: {}", e)))?,
        _ => {
            return Err(CohortError::Config(format!(
                "unsupported config format: {}",
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    for dir in [".", ".."] {
        for name in CONFIG_FILE_NAMES {
            let candidate = Path::new(dir).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| CohortError::Config(format!("missing environment variable: {}", name)))
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}
