use crate::api::error::ApiError;
use crate::api::types::{MappingRequest, MappingResult, RawResponse};
use crate::environment::Environment;
use serde_json::Value;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// The remote NAMASTE ↔ ICD-11 terminology service.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TerminologyApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Asks the service to ingest the NAMASTE CSV stored at `file_path`.
    async fn ingest_namaste(&self, file_path: &str) -> Result<RawResponse, ApiError>;

    /// Triggers a synchronization of ICD-11 codes from the WHO registry.
    async fn sync_icd11(&self) -> Result<RawResponse, ApiError>;

    /// Searches both code systems. The payload shape varies between backend
    /// versions, so it is returned undecoded.
    async fn autocomplete(&self, query: &str) -> Result<Value, ApiError>;

    /// Requests a semantic mapping for a NAMASTE code.
    async fn map_code(&self, request: &MappingRequest) -> Result<MappingResult, ApiError>;

    /// Fetches the mapping audit log.
    async fn audit(&self) -> Result<Value, ApiError>;
}
