//! Terminology API Client
//!
//! A JSON-over-HTTP client for the NAMASTE ↔ ICD-11 service.

use crate::api::TerminologyApi;
use crate::api::error::ApiError;
use crate::api::types::{MappingRequest, MappingResult, RawResponse};
use crate::consts::cli_consts::{endpoints, http};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("namaste-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Reads a body that is displayed whatever the status.
    ///
    /// A non-JSON body on a failed request is reported as an HTTP error so the
    /// status is not lost behind a decoding error.
    async fn into_raw(response: Response) -> Result<RawResponse, ApiError> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(RawResponse { status, body }),
            Err(_) if !(200..300).contains(&status) => Err(ApiError::Http {
                status,
                message: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(e) => Err(ApiError::Decode(e)),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {} {:?}", url, query);
        let response = self.client.get(&url).query(query).send().await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_json(response).await
    }

    async fn post_raw(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<RawResponse, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {} {:?}", url, query);
        let response = self.client.post(&url).query(query).send().await?;
        log::debug!("POST {} -> {}", url, response.status());

        Self::into_raw(response).await
    }
}

#[async_trait::async_trait]
impl TerminologyApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn ingest_namaste(&self, file_path: &str) -> Result<RawResponse, ApiError> {
        self.post_raw(endpoints::INGEST_NAMASTE, &[("file_path", file_path)])
            .await
    }

    async fn sync_icd11(&self) -> Result<RawResponse, ApiError> {
        self.post_raw(endpoints::SYNC_ICD11, &[]).await
    }

    async fn autocomplete(&self, query: &str) -> Result<Value, ApiError> {
        self.get_json(endpoints::AUTOCOMPLETE, &[("q", query)]).await
    }

    async fn map_code(&self, request: &MappingRequest) -> Result<MappingResult, ApiError> {
        let url = self.build_url(endpoints::MAP);
        log::debug!("POST {} {:?}", url, request);
        let response = self.client.post(&url).json(request).send().await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_json(response).await
    }

    async fn audit(&self) -> Result<Value, ApiError> {
        self.get_json(endpoints::AUDIT, &[]).await
    }
}
