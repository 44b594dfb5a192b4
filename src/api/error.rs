//! Shared API error envelope
//!
//! Every failure leaves the API in the same JSON shape:
//! `{"error": {"code", "message", "details"}}`. Validation failures carry
//! the violated field constraints in `details` and map to 422; anything
//! unexpected maps to 500. Absent lookup records are not errors at all and
//! never pass through here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::validation::FieldError;

/// Error response for API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Rejection carrying one or more violated field constraints
    pub fn validation_failed(errors: Vec<FieldError>) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            "Request validation failed",
            json!(errors),
        )
    }

    /// Message-only validation rejection, for payloads too malformed to
    /// blame on a specific field
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl From<FieldError> for ApiError {
    fn from(error: FieldError) -> Self {
        Self::validation_failed(vec![error])
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::validation_failed(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.error.code.as_str() {
            "VALIDATION_ERROR" => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_lists_fields_in_details() {
        let error = ApiError::validation_failed(vec![
            FieldError::missing("name"),
            FieldError::too_long("image.url", 20),
        ]);
        assert_eq!(error.error.code, "VALIDATION_ERROR");
        let details = error.error.details.expect("details present");
        let fields: Vec<&str> = details
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "image.url"]);
    }

    #[test]
    fn test_validation_error_maps_to_422() {
        let response = ApiError::from(FieldError::missing("q")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unknown_code_maps_to_500() {
        let response = ApiError::internal_error("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let error = ApiError::internal_error("boom");
        let value = serde_json::to_value(&error).unwrap();
        assert!(value["error"].get("details").is_none());
    }
}
