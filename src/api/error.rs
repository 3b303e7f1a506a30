//! Error handling for the terminology API client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body was not the JSON shape the call expects.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Error {status}: {message}")]
    Http { status: u16, message: String },

    /// Staging the uploaded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upload was rejected before any request was made.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status_and_body() {
        let err = ApiError::Http {
            status: 422,
            message: "{\"detail\":\"namaste_code missing\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error 422: {\"detail\":\"namaste_code missing\"}"
        );
    }

    #[test]
    fn test_http_error_with_empty_body_keeps_status() {
        let err = ApiError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Error 502: ");
    }
}
