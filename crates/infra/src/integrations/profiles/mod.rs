//! Remote profile store integration

pub mod client;
pub mod types;

pub use client::ProfileStoreClient;
