//! Request and response payloads exchanged with the terminology API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A response shown as-is, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body of `POST /map`. A missing code is sent as `null`, never `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRequest {
    pub namaste_code: Option<String>,
}

impl MappingRequest {
    /// Builds the request from raw user input; blank input maps to `None`.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        Self {
            namaste_code: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingEntry {
    pub icd_code: String,
    pub explanation: String,
}

/// Body of a successful `POST /map`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingResult {
    pub query: String,
    pub mappings: Vec<MappingEntry>,
    pub evidence: Vec<String>,
}
