//! Account provisioning endpoint integration

pub mod client;
pub mod types;

pub use client::ProvisioningClient;
